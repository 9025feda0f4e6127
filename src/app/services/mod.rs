pub mod key_store;
pub mod key_validator;
pub mod provider_clients;

pub use key_store::{KeyStore, ProbeOutcome, ProbeTicket};
pub use key_validator::KeyValidator;
pub use provider_clients::ProviderClients;
