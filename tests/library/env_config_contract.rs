use marketinsight::{AppError, status};
use serial_test::serial;
use std::ffi::{OsStr, OsString};
use std::fs;
use tempfile::TempDir;

struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvVarGuard {
    fn set<K: Into<String>, V: AsRef<OsStr>>(key: K, value: V) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::set_var(&key, value) };
        Self { key, original }
    }

    fn remove<K: Into<String>>(key: K) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::remove_var(&key) };
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.as_ref() {
            unsafe { std::env::set_var(&self.key, original) };
        } else {
            unsafe { std::env::remove_var(&self.key) };
        }
    }
}

#[test]
#[serial]
fn data_dir_comes_from_environment() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("marketinsight_api_keys.json"),
        r#"{"gemini":{"key":"X","status":"valid","provider":"gemini"}}"#,
    )
    .unwrap();
    let _home = EnvVarGuard::set("MARKETINSIGHT_HOME", dir.path());
    let _config = EnvVarGuard::remove("MARKETINSIGHT_CONFIG");
    let _url = EnvVarGuard::remove("MARKETINSIGHT_GEMINI_API_URL");

    let report = status().unwrap();
    assert_eq!(report.valid_providers, vec!["gemini".to_string()]);
}

#[test]
#[serial]
fn explicit_config_path_must_exist() {
    let dir = TempDir::new().unwrap();
    let _home = EnvVarGuard::set("MARKETINSIGHT_HOME", dir.path());
    let _config = EnvVarGuard::set("MARKETINSIGHT_CONFIG", dir.path().join("missing.toml"));

    assert!(matches!(status(), Err(AppError::Configuration(_))));
}

#[test]
#[serial]
fn api_url_override_must_be_a_url() {
    let dir = TempDir::new().unwrap();
    let _home = EnvVarGuard::set("MARKETINSIGHT_HOME", dir.path());
    let _config = EnvVarGuard::remove("MARKETINSIGHT_CONFIG");
    let _url = EnvVarGuard::set("MARKETINSIGHT_GEMINI_API_URL", "not a url");

    assert!(matches!(status(), Err(AppError::InvalidConfig(_))));
}
