use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("Storage Read Error: {key}: {source} {location}")]
    Read {
        key: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage Write Error: {path}: {source} {location}")]
    Write {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage Serialize Error: {key}: {reason} {location}")]
    Serialize {
        key: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Storage Deserialize Error: {key}: {reason} {location}")]
    Deserialize {
        key: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Storage Version Error: {key}: found {found}, supported {supported} {location}")]
    Version {
        key: String,
        found: u32,
        supported: u32,
        location: ErrorLocation,
    },

    #[error("Storage Invalid Key Error: {key:?}: {reason} {location}")]
    InvalidKey {
        key: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Storage Unavailable Error: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl StorageError {
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        StorageError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
