//! Alert banner state.
//!
//! Raising an alert is a two-phase transition: the banner is hidden right
//! away, then the new alert is revealed after a short delay so the
//! presentation layer replays its enter animation even when the same alert
//! is raised twice.
//!
//! The reveal runs as a scheduled task. Raising or hiding an alert cancels
//! the pending reveal, and each reveal carries a generation number checked
//! under the write lock, so a stale reveal can never overwrite a newer
//! transition.

use crate::DEFAULT_ALERT_REVEAL_DELAY_MS;

use models::{Alert, AlertState};

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::{Mutex, RwLock, watch};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Alert state plus the generation of the latest transition.
#[derive(Debug, Default)]
struct AlertCell {
    state: AlertState,
    generation: u64,
}

/// Notification banner store.
///
/// This type is `Clone`; all clones share the same banner.
#[derive(Clone)]
pub struct AlertStore {
    cell: Arc<RwLock<AlertCell>>,
    changes: Arc<watch::Sender<AlertState>>,
    pending_reveal: Arc<Mutex<Option<JoinHandle<()>>>>,
    reveal_delay: Duration,
}

impl AlertStore {
    pub fn new(reveal_delay: Duration) -> Self {
        let (changes, _) = watch::channel(AlertState::default());
        Self {
            cell: Arc::new(RwLock::new(AlertCell::default())),
            changes: Arc::new(changes),
            pending_reveal: Arc::new(Mutex::new(None)),
            reveal_delay,
        }
    }

    /// Raise an alert.
    ///
    /// Hides the banner before returning, then reveals `alert` once the
    /// reveal delay has elapsed. Calling again before the reveal replaces
    /// the pending alert. An alert of kind `none` updates the fields but
    /// stays hidden.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn set_alert(&self, alert: Alert) {
        let mut pending = self.pending_reveal.lock().await;
        cancel_reveal(&mut pending);

        let generation = {
            let mut cell = self.cell.write().await;
            cell.generation += 1;
            cell.state.visible = false;
            self.changes.send_replace(cell.state.clone());
            cell.generation
        };

        debug!("Scheduling {:?} alert reveal in {:?}", alert.kind, self.reveal_delay);

        *pending = Some(tokio::spawn(reveal(
            Arc::clone(&self.cell),
            Arc::clone(&self.changes),
            alert,
            generation,
            self.reveal_delay,
        )));
    }

    /// Hide the banner immediately.
    ///
    /// Kind, message and icon are kept until the next [`set_alert`](Self::set_alert).
    /// A pending reveal is cancelled.
    pub async fn hide_alert(&self) {
        let mut pending = self.pending_reveal.lock().await;
        cancel_reveal(&mut pending);

        let mut cell = self.cell.write().await;
        cell.generation += 1;
        cell.state.visible = false;
        self.changes.send_replace(cell.state.clone());
    }

    /// Current banner state (read-only).
    pub async fn snapshot(&self) -> AlertState {
        self.cell.read().await.state.clone()
    }

    /// Receiver that observes every banner transition.
    pub fn subscribe(&self) -> watch::Receiver<AlertState> {
        self.changes.subscribe()
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }
}

impl Default for AlertStore {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_ALERT_REVEAL_DELAY_MS))
    }
}

fn cancel_reveal(pending: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = pending.take() {
        if !handle.is_finished() {
            debug!("Cancelling pending alert reveal");
        }
        handle.abort();
    }
}

/// Scheduled second phase of `set_alert`.
async fn reveal(
    cell: Arc<RwLock<AlertCell>>,
    changes: Arc<watch::Sender<AlertState>>,
    alert: Alert,
    generation: u64,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;

    let mut cell = cell.write().await;
    if cell.generation != generation {
        debug!("Dropping stale alert reveal (generation {generation})");
        return;
    }

    cell.state = AlertState {
        id: Some(Uuid::new_v4()),
        visible: alert.kind.is_displayable(),
        kind: alert.kind,
        message: alert.message,
        icon: alert.icon,
    };
    changes.send_replace(cell.state.clone());
}
