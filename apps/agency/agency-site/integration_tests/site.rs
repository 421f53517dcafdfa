use agency_site::state::AppState;

use quote_core::config::SiteConfig;

use models::{Alert, AlertKind, CommercialFormData, CoverageForm, HomeForm};

use std::time::Duration;

use tempfile::TempDir;

// ============================================================================
// Integration tests for AppState over real file storage
// A "page reload" is a second AppState built from the same config
// ============================================================================

fn config_in(dir: &TempDir) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.storage.directory = Some(dir.path().join("storage").display().to_string());
    config.alerts.reveal_delay_ms = 20;
    config
}

/// **VALUE**: Verifies the example quote flow end to end.
///
/// **WHY THIS MATTERS**: A visitor fills a commercial quote, reloads, then
/// submits and the form is reset. Every step must be reflected after reload.
///
/// **BUG THIS CATCHES**: Would catch any break between config, storage and
/// the form stores.
#[tokio::test]
async fn given_site_state_when_quote_filled_reloaded_and_reset_then_storage_tracks_each_step() {
    // GIVEN: A site over an empty storage directory
    let dir = TempDir::new().expect("temp dir");
    let config = config_in(&dir);
    let state = AppState::from_config(&config);

    // WHEN: Filling the commercial form and both home groups
    state
        .commercial
        .set_commercial_form(CommercialFormData {
            company_name: String::from("Acme"),
            ..CommercialFormData::default()
        })
        .await
        .expect("set commercial");
    state
        .home
        .set_home_form(HomeForm {
            roof_type: String::from("slate"),
            ..HomeForm::default()
        })
        .await
        .expect("set home");
    state
        .home
        .set_coverage_form(CoverageForm {
            liability_limit: String::from("300000"),
            ..CoverageForm::default()
        })
        .await
        .expect("set coverage");

    // THEN: A reloaded site sees everything
    let reloaded = AppState::from_config(&config).snapshot().await;
    assert_eq!(reloaded.commercial_form.company_name, "Acme");
    assert_eq!(reloaded.home_form.home_form.roof_type, "slate");
    assert_eq!(reloaded.home_form.coverage_form.liability_limit, "300000");

    // WHEN: Resetting the commercial form after submission
    state
        .commercial
        .reset_commercial_form()
        .await
        .expect("reset commercial");

    // THEN: Reload shows a blank commercial form but the home form untouched
    let after_reset = AppState::from_config(&config).snapshot().await;
    assert!(after_reset.commercial_form.is_blank());
    assert_eq!(after_reset.home_form.home_form.roof_type, "slate");
}

/// **VALUE**: Verifies that alerts are not persisted across reloads.
///
/// **WHY THIS MATTERS**: The banner is transient; a reload must never replay
/// an old error.
///
/// **BUG THIS CATCHES**: Would catch alert state leaking into storage.
#[tokio::test]
async fn given_visible_alert_when_site_reloaded_then_alert_starts_hidden() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_in(&dir);
    let state = AppState::from_config(&config);

    state.alerts.set_alert(Alert::success("Quote request sent")).await;
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(state.snapshot().await.alert.visible);

    let reloaded = AppState::from_config(&config).snapshot().await;
    assert_eq!(reloaded.alert.kind, AlertKind::None);
    assert!(!reloaded.alert.visible);
}
