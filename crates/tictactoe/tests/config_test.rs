//! Tests for loading front-end configuration from disk.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use tictactoe::AppConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_full_file_is_loaded() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(
        &path,
        r#"log_file = "/tmp/ttt.log"
log_filter = "debug,tictactoe_core=trace"
tick_rate_ms = 250
mouse = false
"#,
    )
    .expect("Failed to write TOML");

    let config = AppConfig::load_or_default(&path).expect("load");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "debug,tictactoe_core=trace");
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
    assert!(!*config.mouse());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "tick_rate_ms = \"fast\"").expect("Failed to write TOML");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_tick_rate_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("zero.toml");
    fs::write(&path, "tick_rate_ms = 0").expect("Failed to write TOML");

    assert!(AppConfig::from_file(&path).is_err());
}
