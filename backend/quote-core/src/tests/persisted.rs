// Unit tests for the persisted store and the form stores built on it

use crate::error::store::StoreError;
use crate::storage::{ClientStorage, MemoryStorage, StorageRepository};
use crate::store::{CommercialFormStore, HomeFormStore, PersistedStore, StoreCommand};
use crate::{COMMERCIAL_FORM_STORAGE_KEY, HOME_FORM_STORAGE_KEY};

use models::{CommercialFormData, CoverageForm, HomeForm, HomeFormData, OwnerForm};

use std::sync::Arc;

fn commercial_store(storage: &Arc<MemoryStorage>) -> CommercialFormStore {
    CommercialFormStore::new(Arc::new(StorageRepository::<CommercialFormData>::new(
        storage.clone(),
        COMMERCIAL_FORM_STORAGE_KEY,
    )))
}

fn home_store(storage: &Arc<MemoryStorage>) -> HomeFormStore {
    HomeFormStore::new(Arc::new(StorageRepository::<HomeFormData>::new(
        storage.clone(),
        HOME_FORM_STORAGE_KEY,
    )))
}

fn acme_form() -> CommercialFormData {
    CommercialFormData {
        company_name: String::from("Acme"),
        email: String::from("ops@acme.test"),
        coverage_type: vec![String::from("general-liability")],
        ..CommercialFormData::default()
    }
}

// ============================================
// Commercial form store
// ============================================

/// **VALUE**: Verifies that a replaced form reads back exactly.
///
/// **WHY THIS MATTERS**: Every keystroke in the commercial quote form goes
/// through `set_commercial_form`. A lost or altered field loses an answer.
///
/// **BUG THIS CATCHES**: Would catch the read racing ahead of the actor.
#[tokio::test]
async fn given_commercial_store_when_form_set_then_read_returns_same_form() {
    // GIVEN: Fresh store
    let storage = Arc::new(MemoryStorage::new());
    let store = commercial_store(&storage);

    // WHEN: Replacing the form
    store
        .set_commercial_form(acme_form())
        .await
        .expect("set should succeed");

    // THEN: Read yields exactly the same form
    assert_eq!(store.get_commercial_form().await, acme_form());
}

/// **VALUE**: Verifies reset restores the all-empty form.
///
/// **WHY THIS MATTERS**: After a quote is submitted the form must be blank for
/// the next visitor, including the coverage list.
///
/// **BUG THIS CATCHES**: Would catch reset restoring a stale or partial record.
#[tokio::test]
async fn given_filled_commercial_form_when_reset_then_all_fields_empty() {
    let storage = Arc::new(MemoryStorage::new());
    let store = commercial_store(&storage);
    store.set_commercial_form(acme_form()).await.expect("set");

    store.reset_commercial_form().await.expect("reset");

    let form = store.get_commercial_form().await;
    assert_eq!(form, CommercialFormData::default());
    assert_eq!(form.company_name, "");
    assert!(form.coverage_type.is_empty());
}

/// **VALUE**: Verifies that a new store rehydrates the last saved form.
///
/// **WHY THIS MATTERS**: Reloading the page must not lose the visitor's answers.
///
/// **BUG THIS CATCHES**: Would catch saves not reaching storage, or load being
/// skipped at construction.
#[tokio::test]
async fn given_saved_commercial_form_when_new_store_created_then_rehydrates() {
    // GIVEN: A store that saved a form
    let storage = Arc::new(MemoryStorage::new());
    let first = commercial_store(&storage);
    first.set_commercial_form(acme_form()).await.expect("set");

    // WHEN: Simulating a page reload
    let reloaded = commercial_store(&storage);

    // THEN: Persisted form, not the default
    assert_eq!(reloaded.get_commercial_form().await, acme_form());
}

#[tokio::test]
async fn given_corrupt_blob_when_store_created_then_starts_from_defaults() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .set_item(COMMERCIAL_FORM_STORAGE_KEY, "definitely not json")
        .expect("write");

    let store = commercial_store(&storage);

    assert_eq!(store.get_commercial_form().await, CommercialFormData::default());
}

/// **VALUE**: Verifies that a failed save is reported but memory stays updated.
///
/// **WHY THIS MATTERS**: A full browser storage must not freeze the form. The
/// visitor keeps typing; only durability is lost.
///
/// **BUG THIS CATCHES**: Would catch memory being rolled back on save failure,
/// or the failure being swallowed without a trace.
#[tokio::test]
async fn given_failing_storage_when_form_set_then_persist_error_and_memory_updated() {
    // GIVEN: Storage that rejects writes
    let storage = Arc::new(MemoryStorage::new());
    let store = commercial_store(&storage);
    storage.set_fail_writes(true);

    // WHEN: Setting the form
    let result = store.set_commercial_form(acme_form()).await;

    // THEN: Persist error, state applied in memory
    match result {
        Err(ref error @ StoreError::Persist { .. }) => {
            assert!(error.state_applied());
        }
        other => panic!("Expected persist error, got {other:?}"),
    }
    assert_eq!(store.get_commercial_form().await, acme_form());

    // AND: Nothing reached storage
    assert!(storage.is_empty());
}

#[tokio::test]
async fn given_subscriber_when_form_set_then_receives_new_form() {
    let storage = Arc::new(MemoryStorage::new());
    let store = commercial_store(&storage);
    let mut changes = store.subscribe();

    store.set_commercial_form(acme_form()).await.expect("set");

    changes.changed().await.expect("sender alive");
    assert_eq!(*changes.borrow_and_update(), acme_form());
}

/// **VALUE**: Verifies that clones share one record.
///
/// **WHY THIS MATTERS**: The composition root hands clones of the same store
/// to every page section; they must agree.
///
/// **BUG THIS CATCHES**: Would catch a clone getting its own state or actor.
#[tokio::test]
async fn given_cloned_store_when_original_mutated_then_clone_sees_change() {
    let storage = Arc::new(MemoryStorage::new());
    let store = commercial_store(&storage);
    let clone = store.clone();

    store.set_commercial_form(acme_form()).await.expect("set");

    assert_eq!(clone.get_commercial_form().await, acme_form());
    assert_eq!(clone.storage_key(), COMMERCIAL_FORM_STORAGE_KEY);
}

// ============================================
// Home form store
// ============================================

fn sample_home() -> HomeForm {
    HomeForm {
        address: String::from("12 Elm St"),
        year_built: String::from("1987"),
        ..HomeForm::default()
    }
}

fn sample_owner() -> OwnerForm {
    OwnerForm {
        first_name: String::from("Dana"),
        last_name: String::from("Reyes"),
        ..OwnerForm::default()
    }
}

fn sample_coverage() -> CoverageForm {
    CoverageForm {
        deductible: String::from("1000"),
        ..CoverageForm::default()
    }
}

/// **VALUE**: Verifies that each group setter only touches its own group.
///
/// **WHY THIS MATTERS**: The home quote is a multi-step form; finishing the
/// owner step must not wipe the property step.
///
/// **BUG THIS CATCHES**: Would catch a setter replacing the whole record.
#[tokio::test]
async fn given_home_store_when_groups_set_independently_then_only_target_changes() {
    let storage = Arc::new(MemoryStorage::new());
    let store = home_store(&storage);

    // WHEN: Setting the property group
    store.set_home_form(sample_home()).await.expect("set home");

    // THEN: Other groups untouched
    let data = store.get_home_form().await;
    assert_eq!(data.home_form, sample_home());
    assert_eq!(data.owner_form, OwnerForm::default());
    assert_eq!(data.coverage_form, CoverageForm::default());

    // WHEN: Setting owner then coverage
    store.set_owner_form(sample_owner()).await.expect("set owner");
    store
        .set_coverage_form(sample_coverage())
        .await
        .expect("set coverage");

    // THEN: All three groups hold their own values
    assert_eq!(
        store.get_home_form().await,
        HomeFormData {
            home_form: sample_home(),
            owner_form: sample_owner(),
            coverage_form: sample_coverage(),
        }
    );
}

#[tokio::test]
async fn given_filled_home_form_when_reset_then_all_groups_default() {
    let storage = Arc::new(MemoryStorage::new());
    let store = home_store(&storage);
    store.set_home_form(sample_home()).await.expect("set home");
    store.set_owner_form(sample_owner()).await.expect("set owner");
    store
        .set_coverage_form(sample_coverage())
        .await
        .expect("set coverage");

    store.reset_home_form().await.expect("reset");

    assert!(store.get_home_form().await.is_blank());
}

/// **VALUE**: Verifies that all three groups rehydrate together.
///
/// **WHY THIS MATTERS**: The groups share one storage key; a reload must bring
/// every completed step back.
///
/// **BUG THIS CATCHES**: Would catch only the last-set group being saved.
#[tokio::test]
async fn given_saved_home_groups_when_new_store_created_then_all_groups_rehydrate() {
    let storage = Arc::new(MemoryStorage::new());
    let first = home_store(&storage);
    first.set_home_form(sample_home()).await.expect("set home");
    first.set_owner_form(sample_owner()).await.expect("set owner");

    let reloaded = home_store(&storage);

    let data = reloaded.get_home_form().await;
    assert_eq!(data.home_form, sample_home());
    assert_eq!(data.owner_form, sample_owner());
    assert_eq!(data.coverage_form, CoverageForm::default());
}

#[tokio::test]
async fn given_home_and_commercial_stores_when_both_saved_then_keys_are_independent() {
    let storage = Arc::new(MemoryStorage::new());
    let commercial = commercial_store(&storage);
    let home = home_store(&storage);

    commercial.set_commercial_form(acme_form()).await.expect("set");
    home.set_owner_form(sample_owner()).await.expect("set owner");
    commercial.reset_commercial_form().await.expect("reset");

    assert_eq!(storage.len(), 2);
    assert_eq!(home_store(&storage).get_home_form().await.owner_form, sample_owner());
}

// ============================================
// Generic persisted store
// ============================================

/// **VALUE**: Verifies that `Reset` restores the constructor-provided defaults.
///
/// **WHY THIS MATTERS**: Defaults are injected, not hard-coded in the store.
///
/// **BUG THIS CATCHES**: Would catch reset falling back to `T::default()`.
#[tokio::test]
async fn given_custom_defaults_when_reset_then_restores_custom_defaults() {
    let storage = Arc::new(MemoryStorage::new());
    let defaults = CommercialFormData {
        state: String::from("GA"),
        ..CommercialFormData::default()
    };
    let store = PersistedStore::new(
        "test form",
        defaults.clone(),
        Arc::new(StorageRepository::<CommercialFormData>::new(
            storage, "testForm",
        )),
    );

    store
        .update(StoreCommand::Replace(acme_form()))
        .await
        .expect("replace");
    store.update(StoreCommand::Reset).await.expect("reset");

    assert_eq!(store.snapshot().await, defaults);
    assert_eq!(store.name(), "test form");
}
