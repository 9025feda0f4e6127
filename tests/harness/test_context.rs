//! Shared testing harness for `marketinsight` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const SNAPSHOT_FILE: &str = "marketinsight_api_keys.json";

pub(crate) const VALID_GEMINI: &str =
    r#"{"gemini":{"key":"AIza-stored","status":"valid","provider":"gemini"}}"#;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    data_dir: PathBuf,
    api_url: Option<String>,
}

impl TestContext {
    /// Create a new isolated environment with an empty data directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let data_dir = root.path().join("data");
        fs::create_dir_all(&data_dir).expect("Failed to create test data directory");
        Self { root, data_dir, api_url: None }
    }

    /// Route Gemini requests to `url` instead of the public endpoint.
    pub(crate) fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub(crate) fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILE)
    }

    /// Seed the key snapshot file.
    pub(crate) fn write_snapshot(&self, content: &str) {
        fs::write(self.snapshot_path(), content).expect("Failed to write key snapshot");
    }

    pub(crate) fn read_snapshot(&self) -> Option<String> {
        fs::read_to_string(self.snapshot_path()).ok()
    }

    /// Write `config.toml` into the data directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.data_dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Build a command for invoking the compiled `marketinsight` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("marketinsight").expect("Failed to locate marketinsight binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env("MARKETINSIGHT_HOME", self.data_dir())
            .env_remove("MARKETINSIGHT_CONFIG")
            .env_remove("MARKETINSIGHT_LOG")
            .env_remove("MARKETINSIGHT_GEMINI_API_URL");
        if let Some(url) = &self.api_url {
            cmd.env("MARKETINSIGHT_GEMINI_API_URL", url);
        }
        cmd
    }
}
