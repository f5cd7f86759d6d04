//! Configuration file loading tests
//!
//! Covers explicit-path loading, partial files falling back to defaults,
//! and failure on missing or malformed explicit files.

use gbr_common::config::{load_config, TomlConfig, DEFAULT_REMOTE_BASE_URL};
use gbr_common::Error;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes()).expect("Should write config");
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
bind_address = "0.0.0.0"
port = 8080

[remote]
base_url = "http://127.0.0.1:9999"
timeout_secs = 5
genre_cache_secs = 60

[logging]
level = "debug"
"#,
    );

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.bind_address, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.remote.base_url, "http://127.0.0.1:9999");
    assert_eq!(config.remote.timeout_secs, 5);
    assert_eq!(config.remote.genre_cache_secs, 60);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = write_config("port = 9000\n");

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.bind_address, "127.0.0.1");
    assert_eq!(config.remote.base_url, DEFAULT_REMOTE_BASE_URL);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = load_config(Some(&path));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_malformed_explicit_file_is_error() {
    let file = write_config("[remote\nbase_url = ");

    let result = load_config(Some(file.path()));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_no_explicit_path_never_fails_without_file() {
    // Either the platform file exists and parses, or defaults are used
    let config = load_config(None);
    if let Ok(config) = config {
        assert!(config.port > 0);
    } else {
        assert!(gbr_common::config::default_config_path()
            .map(|p| p.exists())
            .unwrap_or(false));
    }
}

#[test]
fn test_default_matches_empty_file() {
    let file = write_config("");
    assert_eq!(load_config(Some(file.path())).unwrap(), TomlConfig::default());
}
