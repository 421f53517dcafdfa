//! Durable client-side storage.
//!
//! Storage is a flat string key → string value map, the same shape as browser
//! local storage. Form stores never touch it directly: they go through a
//! [`FormRepository`], which owns the key and the serialized envelope.
//!
//! # Backends
//!
//! - [`FileStorage`] - one JSON file per key, atomic temp-file + rename writes
//! - [`MemoryStorage`] - in-process map for tests and storage-less sessions
//!
//! Writes carry no locking across processes. Two sessions writing the same
//! key race and the last write wins.

pub mod file;
pub mod memory;
pub mod repository;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use repository::{FormRepository, SNAPSHOT_VERSION, StorageRepository};

use crate::config::SiteConfig;
use crate::error::storage::StorageError;

use common::ErrorLocation;

use std::panic::Location;
use std::sync::Arc;

use log::{info, warn};

/// String key-value storage that survives page reloads.
pub trait ClientStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` when nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Open the storage backend described by `config`.
///
/// Falls back to [`MemoryStorage`] when no storage directory can be resolved;
/// the session then works normally but nothing survives a restart.
pub fn open_storage(config: &SiteConfig) -> Arc<dyn ClientStorage> {
    match config.storage_directory() {
        Some(directory) => {
            let storage = FileStorage::new(directory);
            info!("Using file storage at {}", storage.directory().display());
            Arc::new(storage)
        }
        None => {
            warn!("No storage directory available, form answers will not survive a restart");
            Arc::new(MemoryStorage::new())
        }
    }
}

/// Check that `key` can be used as a storage key.
///
/// Keys become file names, so they must not escape the storage directory.
#[track_caller]
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let reason = if key.trim().is_empty() {
        Some("key cannot be empty")
    } else if key.starts_with('.') {
        Some("key cannot start with '.'")
    } else if key.contains(['/', '\\']) {
        Some("key cannot contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(StorageError::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Ok(()),
    }
}
