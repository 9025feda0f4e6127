#[path = "../harness/mod.rs"]
mod harness;

mod copy_contract;
mod keys_contract;
mod products_contract;
mod status_contract;
