//! Application state: the composition root of the site's stores.
//!
//! One `AppState` is built at start-up and cloned into every page section
//! that reads or edits a store. All clones share the same stores.

use crate::error::SiteError;

use quote_core::config::SiteConfig;
use quote_core::storage::{ClientStorage, StorageRepository, open_storage};
use quote_core::store::{AlertStore, CommercialFormStore, HomeFormStore};

use models::{AlertBuilder, AlertKind, AlertState, CommercialFormData, HomeFormData};

use std::sync::Arc;

use log::info;
use serde::Serialize;

/// Point-in-time view of every store.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSnapshot {
    pub alert: AlertState,
    pub commercial_form: CommercialFormData,
    pub home_form: HomeFormData,
}

#[derive(Clone)]
pub struct AppState {
    pub alerts: AlertStore,
    pub commercial: CommercialFormStore,
    pub home: HomeFormStore,
}

impl AppState {
    /// Build the stores over the storage backend described by `config`.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::with_storage(config, open_storage(config))
    }

    /// Build the stores over an explicit storage backend.
    ///
    /// Both form stores rehydrate from `storage` before this returns.
    pub fn with_storage(config: &SiteConfig, storage: Arc<dyn ClientStorage>) -> Self {
        let commercial = CommercialFormStore::new(Arc::new(
            StorageRepository::<CommercialFormData>::new(
                Arc::clone(&storage),
                config.storage.commercial_key.clone(),
            ),
        ));
        let home = HomeFormStore::new(Arc::new(StorageRepository::<HomeFormData>::new(
            storage,
            config.storage.home_key.clone(),
        )));

        info!(
            "Stores ready (commercial key {}, home key {}, alert delay {:?})",
            commercial.storage_key(),
            home.storage_key(),
            config.reveal_delay()
        );

        Self {
            alerts: AlertStore::new(config.reveal_delay()),
            commercial,
            home,
        }
    }

    /// Validate an alert and raise it on the banner.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Alert`] when a displayable kind has no message or
    /// the icon is empty. The banner is left untouched in that case.
    pub async fn raise_alert(
        &self,
        kind: AlertKind,
        message: &str,
        icon: Option<&str>,
    ) -> Result<(), SiteError> {
        let mut builder = AlertBuilder::default()
            .with_kind(kind)
            .with_message(message);
        if let Some(icon) = icon {
            builder = builder.with_icon(icon);
        }

        self.alerts.set_alert(builder.build()?).await;
        Ok(())
    }

    pub async fn snapshot(&self) -> SiteSnapshot {
        SiteSnapshot {
            alert: self.alerts.snapshot().await,
            commercial_form: self.commercial.get_commercial_form().await,
            home_form: self.home.get_home_form().await,
        }
    }
}
