//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use circlegroups_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_env() {
    env::remove_var("CIRCLEGROUPS_DATA_DIR");
    env::remove_var("CIRCLEGROUPS_STORAGE_KEY");
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = LayeredConfig::config_file_path(dir.path());
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "data_dir = \"from-file\"\nstorage_key = \"file-key\"\n");

    env::set_var("CIRCLEGROUPS_STORAGE_KEY", "env-key");

    let config = LayeredConfig::with_defaults().load_from_file(&path).unwrap().load_from_env();

    assert_eq!(config.data_dir.value, PathBuf::from("from-file"));
    assert_eq!(config.data_dir.source, ConfigSource::File);
    assert_eq!(config.storage_key.value, "env-key");
    assert_eq!(config.storage_key.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_everything() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "storage_key = \"file-key\"\n");

    env::set_var("CIRCLEGROUPS_DATA_DIR", "/from/env");
    env::set_var("CIRCLEGROUPS_STORAGE_KEY", "env-key");

    let mut config = LayeredConfig::with_defaults().load_from_file(&path).unwrap().load_from_env();
    config.update_from_cli(CliConfigOverrides {
        data_dir: Some(PathBuf::from("/from/cli")),
        storage_key: Some("cli-key".to_string()),
    });

    assert_eq!(config.data_dir.value, PathBuf::from("/from/cli"));
    assert_eq!(config.data_dir.source, ConfigSource::Cli);
    assert_eq!(config.storage_key.value, "cli-key");
    assert_eq!(config.storage_key.source, ConfigSource::Cli);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_value_is_ignored() {
    clear_env();
    env::set_var("CIRCLEGROUPS_STORAGE_KEY", "../../etc/passwd");
    env::set_var("CIRCLEGROUPS_DATA_DIR", "   ");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.storage_key.value, "circle-groups");
    assert_eq!(config.storage_key.source, ConfigSource::Default);
    assert_eq!(config.data_dir.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_partial_file_configuration() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "# only the key\nstorage_key = \"groups\"\n");

    let config = LayeredConfig::with_defaults().load_from_file_if_exists(&path).unwrap();

    assert_eq!(config.storage_key.value, "groups");
    assert_eq!(config.data_dir.source, ConfigSource::Default);
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "storage_key = [unclosed");

    assert!(LayeredConfig::with_defaults().load_from_file(&path).is_err());
}
