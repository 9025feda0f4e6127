//! Durable key snapshot port definition.

use crate::domain::AppError;

/// Port for the durable key snapshot.
///
/// Implementations store one opaque value and replace it wholesale.
pub trait KeyStorage {
    /// Read the snapshot, or `None` when nothing was persisted yet.
    fn read_snapshot(&self) -> Result<Option<String>, AppError>;

    /// Replace the snapshot.
    fn write_snapshot(&self, snapshot: &str) -> Result<(), AppError>;
}
