//! File-backed key snapshot storage.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::KeyStorage;

/// Stores the key snapshot as a single JSON file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// snapshot, so readers never observe a partial file.
#[derive(Debug, Clone)]
pub struct FilesystemKeyStorage {
    path: PathBuf,
    writable: bool,
}

impl FilesystemKeyStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), writable: true }
    }

    /// Reads the snapshot at `path` but discards every write.
    pub fn read_only(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), writable: false }
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyStorage for FilesystemKeyStorage {
    fn read_snapshot(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_snapshot(&self, snapshot: &str) -> Result<(), AppError> {
        if !self.writable {
            tracing::debug!(path = %self.path.display(), "read-only storage, snapshot discarded");
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        let written = write_temp(&temp, snapshot).and_then(|()| fs::rename(&temp, &self.path));
        if let Err(err) = written {
            if let Err(cleanup) = fs::remove_file(&temp) {
                if cleanup.kind() != ErrorKind::NotFound {
                    tracing::warn!(
                        path = %temp.display(),
                        error = %cleanup,
                        "could not remove temporary snapshot"
                    );
                }
            }
            return Err(err.into());
        }

        tracing::debug!(path = %self.path.display(), "key snapshot written");
        Ok(())
    }
}

fn write_temp(path: &Path, snapshot: &str) -> std::io::Result<()> {
    let mut file = snapshot_options().open(path)?;
    restrict_permissions(&file)?;
    file.write_all(snapshot.as_bytes())?;
    file.sync_all()
}

/// Owner-only access from creation; secrets are stored in plain text.
#[cfg(unix)]
fn snapshot_options() -> OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true).mode(0o600);
    options
}

#[cfg(not(unix))]
fn snapshot_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    options
}

/// A leftover temp file keeps its old mode when reopened.
#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
