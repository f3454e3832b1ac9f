use crate::error::Result;
use crate::models::{Group, GroupCollection};
use crate::ports::KeyValueStore;

/// Key under which the collection is stored unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "circle-groups";

/// Saves and loads the whole group collection under a single key
#[derive(Debug, Clone)]
pub struct GroupRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> GroupRepository<S> {
    /// Repository using [`DEFAULT_STORAGE_KEY`]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored collection.
    ///
    /// Never fails: a missing, unreadable or malformed slot yields an empty
    /// collection.
    pub fn load(&self) -> GroupCollection {
        let content = match self.store.get(&self.key) {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No stored groups, starting empty");
                return GroupCollection::new();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read stored groups, starting empty");
                return GroupCollection::new();
            }
        };

        match serde_json::from_str::<Option<Vec<Group>>>(&content) {
            Ok(groups) => {
                let groups = groups.unwrap_or_default();
                let loaded = groups.len();
                let collection = GroupCollection::from_groups(groups);
                if collection.len() != loaded {
                    tracing::warn!(
                        key = %self.key,
                        records = loaded,
                        groups = collection.len(),
                        "Stored groups contained duplicate ids; later records replaced earlier ones"
                    );
                }
                tracing::debug!(key = %self.key, groups = collection.len(), "Loaded groups");
                collection
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored groups are corrupt, starting empty");
                GroupCollection::new()
            }
        }
    }

    /// Write the full collection, replacing whatever was stored
    pub fn save(&self, groups: &GroupCollection) -> Result<()> {
        let content = serde_json::to_string(groups)?;
        self.store.set(&self.key, &content)?;
        tracing::debug!(key = %self.key, groups = groups.len(), "Saved groups");
        Ok(())
    }
}
