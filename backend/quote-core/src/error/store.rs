use crate::error::storage::StorageError;

use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Errors reported by store mutations.
///
/// A `Persist` error means the in-memory state was updated but the durable
/// copy was not. Callers that want best-effort persistence may ignore it.
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("Store Persist Error: {store}: {source} {location}")]
    Persist {
        store: &'static str,
        location: ErrorLocation,
        #[source]
        source: StorageError,
    },

    #[error("Store Actor Unavailable Error: {store}: {message} {location}")]
    ActorUnavailable {
        store: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// True when the mutation is visible in memory despite the error.
    pub fn state_applied(&self) -> bool {
        matches!(self, StoreError::Persist { .. })
    }
}
