use quote_core::config::SiteConfig;
use quote_core::storage::{FileStorage, StorageRepository, open_storage};
use quote_core::store::{CommercialFormStore, HomeFormStore};
use quote_core::{COMMERCIAL_FORM_STORAGE_KEY, HOME_FORM_STORAGE_KEY};

use models::{CommercialFormData, HomeForm, HomeFormData, OwnerForm};

use std::sync::Arc;

use tempfile::TempDir;

// ============================================================================
// Public API tests for persisted form stores over file storage
// These simulate page reloads by building fresh stores over the same directory
// ============================================================================

fn commercial_over(dir: &TempDir) -> CommercialFormStore {
    let storage = Arc::new(FileStorage::new(dir.path()));
    CommercialFormStore::new(Arc::new(StorageRepository::<CommercialFormData>::new(
        storage,
        COMMERCIAL_FORM_STORAGE_KEY,
    )))
}

fn home_over(dir: &TempDir) -> HomeFormStore {
    let storage = Arc::new(FileStorage::new(dir.path()));
    HomeFormStore::new(Arc::new(StorageRepository::<HomeFormData>::new(
        storage,
        HOME_FORM_STORAGE_KEY,
    )))
}

/// **VALUE**: Verifies set → reload → reset → reload over real files.
///
/// **WHY THIS MATTERS**: This is the whole lifecycle of a quote form across
/// page reloads: answers survive until the form is reset, then stay reset.
///
/// **BUG THIS CATCHES**: Would catch reset only clearing memory and the old
/// answers coming back on the next load.
#[tokio::test]
async fn given_file_backed_commercial_store_when_set_reloaded_and_reset_then_storage_follows() {
    // GIVEN: A store over an empty directory
    let dir = TempDir::new().expect("temp dir");
    let store = commercial_over(&dir);
    let form = CommercialFormData {
        company_name: String::from("Acme"),
        ..CommercialFormData::default()
    };

    // WHEN: Setting the form and reloading
    store.set_commercial_form(form.clone()).await.expect("set");
    let reloaded = commercial_over(&dir);

    // THEN: Reloaded store has the answers
    assert_eq!(reloaded.get_commercial_form().await, form);
    assert!(dir.path().join("CommercialInsuranceForm.json").exists());

    // WHEN: Resetting and reloading again
    reloaded.reset_commercial_form().await.expect("reset");
    let after_reset = commercial_over(&dir);

    // THEN: Defaults, including empty name and coverage list
    let final_form = after_reset.get_commercial_form().await;
    assert_eq!(final_form, CommercialFormData::default());
    assert_eq!(final_form.company_name, "");
    assert!(final_form.coverage_type.is_empty());
}

#[tokio::test]
async fn given_file_backed_home_store_when_owner_set_then_reload_restores_groups() {
    let dir = TempDir::new().expect("temp dir");
    let owner = OwnerForm {
        email: String::from("dana@example.test"),
        ..OwnerForm::default()
    };

    home_over(&dir)
        .set_owner_form(owner.clone())
        .await
        .expect("set owner");

    let data = home_over(&dir).get_home_form().await;
    assert_eq!(data.owner_form, owner);
    assert_eq!(data.home_form, HomeForm::default());
}

/// **VALUE**: Verifies that `open_storage` honours the configured directory.
///
/// **WHY THIS MATTERS**: Operators relocate form storage through config.
///
/// **BUG THIS CATCHES**: Would catch the override being ignored in favour of
/// the platform data directory.
#[tokio::test]
async fn given_config_with_storage_directory_when_opening_storage_then_writes_there() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = SiteConfig::default();
    config.storage.directory = Some(dir.path().join("forms").display().to_string());

    let storage = open_storage(&config);
    let store = CommercialFormStore::new(Arc::new(StorageRepository::<CommercialFormData>::new(
        storage,
        config.storage.commercial_key.clone(),
    )));
    store
        .set_commercial_form(CommercialFormData::default())
        .await
        .expect("set");

    assert!(dir.path().join("forms").join("CommercialInsuranceForm.json").exists());
}
