//! File-backed key-value store: one JSON file per key

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::config::parse_storage_key;
use crate::error::{Error, Result};
use crate::ports::KeyValueStore;

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write next to the target and rename, so readers never see a partial file
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Wrote storage slot");
        Ok(())
    }
}

/// Keys follow the storage key rule exactly; surrounding whitespace is not trimmed here
fn validate_key(key: &str) -> Result<()> {
    match parse_storage_key(key) {
        Ok(parsed) if parsed == key => Ok(()),
        _ => Err(Error::ConfigInvalid {
            key: "storage_key".to_string(),
            reason: format!("'{}' cannot be used as a file name", key),
        }),
    }
}
