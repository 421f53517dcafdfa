use common::ErrorLocation;

use models::ModelError;
use quote_core::error::{ConfigError, StoreError};

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the site application layer.
///
/// These errors are converted to strings at the presentation boundary, but we
/// keep structured error information and location tracking internally.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum SiteError {
    /// Error from this App
    #[error("Site Error: {message} {location}")]
    Site {
        message: String,
        location: ErrorLocation,
    },

    /// Site configuration could not be loaded or saved
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// An alert payload was rejected before reaching the banner
    #[error("Alert Error: {message} {location}")]
    Alert {
        message: String,
        location: ErrorLocation,
    },

    /// A store mutation failed
    #[error("Store Error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for SiteError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        SiteError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for SiteError {
    #[track_caller]
    fn from(error: StoreError) -> Self {
        SiteError::Store {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for SiteError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        SiteError::Alert {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
