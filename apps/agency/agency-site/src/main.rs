use agency_site::error::SiteError;
use agency_site::logger::initialize as LoggerInitialize;
use agency_site::state::AppState;

use quote_core::config::{SiteConfig, default_config_dir};

use models::AlertKind;

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use log::{info, warn};

const LOG_DIR_NAME: &str = "logs";
const RESTORED_QUOTE_MESSAGE: &str = "Restored your quote in progress";
const RESTORED_QUOTE_ICON: &str = "history";
const REVEAL_MARGIN: Duration = Duration::from_millis(10);

#[tokio::main]
async fn main() -> Result<(), SiteError> {
    // Config directory: first argument, else the platform config dir
    let config_dir = match std::env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => default_config_dir().ok_or_else(|| SiteError::Site {
            message: String::from("No config directory available, pass one as argument"),
            location: ErrorLocation::from(Location::caller()),
        })?,
    };

    // Initialize logger FIRST
    LoggerInitialize(&config_dir.join(LOG_DIR_NAME))?;

    info!("Agency site starting");
    info!("Config directory: {}", config_dir.display());

    let config = match SiteConfig::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default config: {e}");
            SiteConfig::default()
        }
    };

    let state = AppState::from_config(&config);
    let restored = state.snapshot().await;

    if restored.commercial_form.is_blank() && restored.home_form.is_blank() {
        info!("No quote in progress");
    } else {
        state
            .raise_alert(AlertKind::Info, RESTORED_QUOTE_MESSAGE, Some(RESTORED_QUOTE_ICON))
            .await?;
        // Let the banner reveal before reporting
        tokio::time::sleep(state.alerts.reveal_delay() + REVEAL_MARGIN).await;
    }

    let snapshot = state.snapshot().await;

    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| SiteError::Site {
        message: format!("Failed to serialize snapshot: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;
    println!("{json}");

    Ok(())
}
