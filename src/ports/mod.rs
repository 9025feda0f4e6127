mod generation_client;
mod key_storage;

pub use generation_client::{GenerationClient, MockGenerationClient};
pub use key_storage::KeyStorage;
