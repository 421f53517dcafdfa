use crate::error::storage::StorageError;
use crate::storage::ClientStorage;

use common::ErrorLocation;

use std::marker::PhantomData;
use std::panic::Location;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version written into every persisted snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Load/save access to one persisted form record.
pub trait FormRepository<T>: Send + Sync {
    /// Storage key the record lives under.
    fn key(&self) -> &str;

    /// Load the persisted record, `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<T>, StorageError>;

    /// Persist `value`, replacing the previous record.
    fn save(&self, value: &T) -> Result<(), StorageError>;
}

/// Envelope stored under the repository key.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSnapshot<S> {
    version: u32,
    state: S,
}

/// [`FormRepository`] backed by a [`ClientStorage`] and a fixed key.
pub struct StorageRepository<T> {
    storage: Arc<dyn ClientStorage>,
    key: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> StorageRepository<T> {
    pub fn new(storage: Arc<dyn ClientStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            _record: PhantomData,
        }
    }

    /// Remove the persisted record.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)
    }
}

impl<T> FormRepository<T> for StorageRepository<T>
where
    T: Serialize + DeserializeOwned,
{
    fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };

        let snapshot: PersistedSnapshot<Value> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Deserialize {
                key: self.key.clone(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::Version {
                key: self.key.clone(),
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let state = serde_json::from_value(snapshot.state).map_err(|e| StorageError::Deserialize {
            key: self.key.clone(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Some(state))
    }

    fn save(&self, value: &T) -> Result<(), StorageError> {
        let snapshot = PersistedSnapshot {
            version: SNAPSHOT_VERSION,
            state: value,
        };

        let json = serde_json::to_string(&snapshot).map_err(|e| StorageError::Serialize {
            key: self.key.clone(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.storage.set_item(&self.key, &json)
    }
}
