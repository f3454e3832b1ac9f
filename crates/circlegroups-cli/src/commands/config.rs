//! Config command implementation

use crate::config_loader::storage_path;
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;
use circlegroups_core::config::LayeredConfig;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let map = config.to_inspection_map();
    let entry = |key: &str| {
        map.get(key).map(|(value, source)| ConfigEntry {
            value: value.clone(),
            source: format!("{:?}", source),
        })
    };

    if output.is_json() {
        if let (Some(data_dir), Some(storage_key)) = (entry("data_dir"), entry("storage_key")) {
            output.result(ConfigOutput { data_dir, storage_key })?;
        }
    } else {
        output.section("Configuration");
        let mut keys: Vec<_> = map.keys().collect();
        keys.sort();
        for key in keys {
            let (value, source) = &map[key];
            output.kv(key, format!("{} ({:?})", value, source));
        }
        output.kv("storage_file", storage_path(config).display());
    }

    Ok(())
}
