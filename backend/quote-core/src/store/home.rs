use crate::error::store::StoreError;
use crate::storage::FormRepository;
use crate::store::persisted::{PersistedStore, StoreCommand};

use models::{CoverageForm, HomeForm, HomeFormData, OwnerForm};

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

const STORE_NAME: &str = "home form";

/// State of the home insurance quote form.
///
/// The three groups (property, owner, coverage) are set independently but
/// persisted and rehydrated together under one key.
#[derive(Clone)]
pub struct HomeFormStore {
    inner: PersistedStore<HomeFormData>,
}

impl HomeFormStore {
    pub fn new(repository: Arc<dyn FormRepository<HomeFormData>>) -> Self {
        Self {
            inner: PersistedStore::new(STORE_NAME, HomeFormData::default(), repository),
        }
    }

    /// Replace the property group only.
    pub async fn set_home_form(&self, form: HomeForm) -> Result<(), StoreError> {
        self.inner
            .update(StoreCommand::Modify(Box::new(move |data: &mut HomeFormData| {
                data.home_form = form;
            })))
            .await
    }

    /// Replace the owner group only.
    pub async fn set_owner_form(&self, form: OwnerForm) -> Result<(), StoreError> {
        self.inner
            .update(StoreCommand::Modify(Box::new(move |data: &mut HomeFormData| {
                data.owner_form = form;
            })))
            .await
    }

    /// Replace the coverage group only.
    pub async fn set_coverage_form(&self, form: CoverageForm) -> Result<(), StoreError> {
        self.inner
            .update(StoreCommand::Modify(Box::new(move |data: &mut HomeFormData| {
                data.coverage_form = form;
            })))
            .await
    }

    /// Reset all three groups at once.
    pub async fn reset_home_form(&self) -> Result<(), StoreError> {
        info!("Resetting home form");
        self.inner.update(StoreCommand::Reset).await
    }

    pub async fn get_home_form(&self) -> HomeFormData {
        self.inner.snapshot().await
    }

    pub fn subscribe(&self) -> watch::Receiver<HomeFormData> {
        self.inner.subscribe()
    }

    pub fn storage_key(&self) -> &str {
        self.inner.storage_key()
    }
}
