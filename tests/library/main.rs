#[path = "../harness/mod.rs"]
mod harness;

mod env_config_contract;
mod public_api_contract;
