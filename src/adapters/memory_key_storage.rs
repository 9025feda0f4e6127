use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::KeyStorage;

/// In-memory key snapshot storage.
///
/// Clones share the same snapshot, so a test can keep a handle and inspect
/// what the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyStorage {
    snapshot: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryKeyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: &str) -> Self {
        let storage = Self::new();
        *storage.snapshot.lock().unwrap_or_else(|e| e.into_inner()) = Some(snapshot.to_string());
        storage
    }

    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of `write_snapshot` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyStorage for MemoryKeyStorage {
    fn read_snapshot(&self) -> Result<Option<String>, AppError> {
        Ok(self.snapshot())
    }

    fn write_snapshot(&self, snapshot: &str) -> Result<(), AppError> {
        *self.snapshot.lock().unwrap_or_else(|e| e.into_inner()) = Some(snapshot.to_string());
        *self.writes.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}
