//! Persistence adapters for the group collection
//!
//! The collection is stored as a whole under one key of a [`KeyValueStore`].
//!
//! [`KeyValueStore`]: crate::ports::KeyValueStore

pub mod file;
pub mod memory;
pub mod repository;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use repository::{GroupRepository, DEFAULT_STORAGE_KEY};
