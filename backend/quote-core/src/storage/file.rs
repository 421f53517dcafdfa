use crate::error::storage::StorageError;
use crate::storage::{ClientStorage, validate_key};

use common::ErrorLocation;

use std::io::{ErrorKind, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

const ITEM_EXTENSION: &str = "json";

/// File-backed [`ClientStorage`].
///
/// Each key maps to `{directory}/{key}.json`. The directory is created on the
/// first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file holding `key`.
    #[track_caller]
    pub fn item_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.directory.join(format!("{key}.{ITEM_EXTENSION}")))
    }
}

impl ClientStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.item_path(key)?;

        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored item for {key} at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                location: ErrorLocation::from(Location::caller()),
                source: e,
            }),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.item_path(key)?;

        std::fs::create_dir_all(&self.directory).map_err(|e| StorageError::Write {
            path: self.directory.clone(),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

        // Each writer gets its own temp file, so concurrent writers of one key
        // never share a half-written file
        let mut temp_file = NamedTempFile::new_in(&self.directory).map_err(|e| {
            StorageError::Write {
                path: self.directory.clone(),
                location: ErrorLocation::from(Location::caller()),
                source: e,
            }
        })?;

        temp_file
            .write_all(value.as_bytes())
            .and_then(|()| temp_file.as_file().sync_all())
            .map_err(|e| StorageError::Write {
                path: temp_file.path().to_path_buf(),
                location: ErrorLocation::from(Location::caller()),
                source: e,
            })?;

        // Rename is atomic on POSIX, readers never see a half-written item
        temp_file.persist(&path).map_err(|e| StorageError::Write {
            path: path.clone(),
            location: ErrorLocation::from(Location::caller()),
            source: e.error,
        })?;

        debug!("Stored {key} at {}", path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.item_path(key)?;

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write {
                path,
                location: ErrorLocation::from(Location::caller()),
                source: e,
            }),
        }
    }
}
