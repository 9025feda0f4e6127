pub mod gemini_client_http;
pub mod key_storage_filesystem;
pub mod memory_key_storage;

pub use gemini_client_http::HttpGeminiClient;
pub use key_storage_filesystem::FilesystemKeyStorage;
pub use memory_key_storage::MemoryKeyStorage;
