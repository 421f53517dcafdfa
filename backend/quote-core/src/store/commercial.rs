use crate::error::store::StoreError;
use crate::storage::FormRepository;
use crate::store::persisted::{PersistedStore, StoreCommand};

use models::CommercialFormData;

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

const STORE_NAME: &str = "commercial form";

/// State of the commercial insurance quote form.
///
/// Rehydrated from its repository on construction and saved after every
/// mutation. `Clone` handles share the same state.
#[derive(Clone)]
pub struct CommercialFormStore {
    inner: PersistedStore<CommercialFormData>,
}

impl CommercialFormStore {
    pub fn new(repository: Arc<dyn FormRepository<CommercialFormData>>) -> Self {
        Self {
            inner: PersistedStore::new(STORE_NAME, CommercialFormData::default(), repository),
        }
    }

    /// Replace the whole form. No field validation is performed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persist`] when the new form is in memory but
    /// could not be saved.
    pub async fn set_commercial_form(&self, data: CommercialFormData) -> Result<(), StoreError> {
        self.inner.update(StoreCommand::Replace(data)).await
    }

    /// Restore the empty form.
    pub async fn reset_commercial_form(&self) -> Result<(), StoreError> {
        info!("Resetting commercial form");
        self.inner.update(StoreCommand::Reset).await
    }

    pub async fn get_commercial_form(&self) -> CommercialFormData {
        self.inner.snapshot().await
    }

    pub fn subscribe(&self) -> watch::Receiver<CommercialFormData> {
        self.inner.subscribe()
    }

    pub fn storage_key(&self) -> &str {
        self.inner.storage_key()
    }
}
