//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use circlegroups_core::config::{parse_storage_key, CliConfigOverrides, LayeredConfig};
use circlegroups_core::ids::TimestampIds;
use circlegroups_core::persistence::{FileKeyValueStore, GroupRepository};
use circlegroups_core::SessionController;
use std::path::PathBuf;

use crate::cli::Cli;

pub type CliSession = SessionController<FileKeyValueStore, TimestampIds>;

/// Load layered configuration with CLI overrides.
///
/// The config file is looked up in the data directory chosen by the CLI,
/// the environment, or the default, in that order.
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let storage_key = cli
        .storage_key
        .as_deref()
        .map(parse_storage_key)
        .transpose()
        .context("Invalid --storage-key")?;

    let overrides = CliConfigOverrides {
        data_dir: cli.data_dir.clone(),
        storage_key,
    };

    // The environment is read once and layered over the file afterwards
    let env_config = LayeredConfig::with_defaults().load_from_env();
    let lookup_dir = overrides
        .data_dir
        .clone()
        .unwrap_or_else(|| env_config.data_dir.value.clone());
    let config_path = LayeredConfig::config_file_path(&lookup_dir);

    let mut config = LayeredConfig::with_defaults()
        .load_from_file_if_exists(&config_path)
        .with_context(|| format!("Failed to load configuration file {}", config_path.display()))?;
    config.merge(env_config);
    config.update_from_cli(overrides);

    tracing::debug!(
        data_dir = %config.data_dir.value.display(),
        storage_key = %config.storage_key.value,
        "Resolved configuration"
    );
    Ok(config)
}

/// Open an editing session on the configured store
pub fn open_session(config: &LayeredConfig) -> CliSession {
    let store = FileKeyValueStore::new(config.data_dir.value.clone());
    let repository = GroupRepository::with_key(store, config.storage_key.value.clone());
    SessionController::open(repository, TimestampIds::new())
}

/// Path of the file holding the groups
pub fn storage_path(config: &LayeredConfig) -> PathBuf {
    config.data_dir.value.join(format!("{}.json", config.storage_key.value))
}
