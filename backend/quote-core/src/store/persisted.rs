//! Persisted store using actor pattern.
//!
//! Generic state container shared by the quote form stores. It owns one
//! record, rehydrates it from a [`FormRepository`] on construction, and
//! mirrors every mutation back to the repository.
//!
//! # Architecture
//!
//! - Mutations are sent as [`StoreCommand`]s over an mpsc channel
//! - A dedicated task applies them one at a time: memory first, then the
//!   watch channel, then the repository
//! - Every command is acknowledged through a oneshot, so a read after an
//!   awaited mutation always observes it
//! - Reads use `Arc<RwLock<T>>` and never wait on the actor
//!
//! A failed save leaves the in-memory record updated. The failure is logged
//! and handed back to the caller as [`StoreError::Persist`].

use crate::error::storage::StorageError;
use crate::error::store::StoreError;
use crate::storage::FormRepository;

use common::ErrorLocation;

use std::panic::Location;
use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::{Mutex, RwLock, mpsc, oneshot, watch};

/// In-place edit of the stored record.
pub type Mutation<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Commands that mutate a persisted store.
pub enum StoreCommand<T> {
    /// Replace the whole record
    Replace(T),

    /// Edit part of the record in place
    Modify(Mutation<T>),

    /// Restore the constructor-provided defaults
    Reset,
}

impl<T> StoreCommand<T> {
    fn label(&self) -> &'static str {
        match self {
            StoreCommand::Replace(_) => "replace",
            StoreCommand::Modify(_) => "modify",
            StoreCommand::Reset => "reset",
        }
    }
}

/// A command plus the channel its outcome is reported on.
struct Envelope<T> {
    command: StoreCommand<T>,
    reply: oneshot::Sender<Result<(), StorageError>>,
}

/// Persisted state container.
///
/// This type is `Clone`; all clones share the same record, actor and
/// repository.
pub struct PersistedStore<T> {
    /// Store name used in logs and errors
    name: &'static str,

    /// Channel to send mutation commands to the actor
    command_tx: Arc<Mutex<Option<mpsc::Sender<Envelope<T>>>>>,

    /// Shared read-only access to the record
    state: Arc<RwLock<T>>,

    /// Change notifications for subscribers
    changes: Arc<watch::Sender<T>>,

    /// Value restored by `Reset`
    defaults: Arc<T>,

    repository: Arc<dyn FormRepository<T>>,

    /// Track if actor has been initialized
    actor_init: Arc<Mutex<bool>>,
}

impl<T> Clone for PersistedStore<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            command_tx: Arc::clone(&self.command_tx),
            state: Arc::clone(&self.state),
            changes: Arc::clone(&self.changes),
            defaults: Arc::clone(&self.defaults),
            repository: Arc::clone(&self.repository),
            actor_init: Arc::clone(&self.actor_init),
        }
    }
}

impl<T> PersistedStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a store and rehydrate it from `repository`.
    ///
    /// The persisted record, when present and readable, replaces `defaults`
    /// before any caller can mutate the store. A missing record yields the
    /// defaults; an unreadable one is logged and also yields the defaults.
    ///
    /// The actor is spawned lazily on the first mutation, so construction
    /// does not need a runtime.
    pub fn new(name: &'static str, defaults: T, repository: Arc<dyn FormRepository<T>>) -> Self {
        let initial = match repository.load() {
            Ok(Some(persisted)) => {
                info!("Rehydrated {name} from storage key {}", repository.key());
                persisted
            }
            Ok(None) => {
                info!(
                    "No persisted {name} under {}, using defaults",
                    repository.key()
                );
                defaults.clone()
            }
            Err(e) => {
                warn!("Failed to rehydrate {name}, using defaults: {e}");
                defaults.clone()
            }
        };

        let (changes, _) = watch::channel(initial.clone());

        Self {
            name,
            command_tx: Arc::new(Mutex::new(None)),
            state: Arc::new(RwLock::new(initial)),
            changes: Arc::new(changes),
            defaults: Arc::new(defaults),
            repository,
            actor_init: Arc::new(Mutex::new(false)),
        }
    }

    /// Apply a mutation and wait until it is in memory and persisted.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Persist`] if the record was updated but the save failed
    /// - [`StoreError::ActorUnavailable`] if the actor has died (should never happen)
    pub async fn update(&self, command: StoreCommand<T>) -> Result<(), StoreError> {
        self.ensure_actor().await;

        let tx = self.command_tx.lock().await.clone().ok_or_else(|| {
            StoreError::ActorUnavailable {
                store: self.name,
                message: "Store actor not initialized".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let (reply_tx, reply_rx) = oneshot::channel();
        tx.send(Envelope {
            command,
            reply: reply_tx,
        })
        .await
        .map_err(|e| StoreError::ActorUnavailable {
            store: self.name,
            message: format!("Store actor died: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let outcome = reply_rx.await.map_err(|e| StoreError::ActorUnavailable {
            store: self.name,
            message: format!("Store actor dropped reply: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        outcome.map_err(|source| StoreError::Persist {
            store: self.name,
            location: ErrorLocation::from(Location::caller()),
            source,
        })
    }

    /// Current record (read-only).
    pub async fn snapshot(&self) -> T {
        self.state.read().await.clone()
    }

    /// Receiver that observes every applied mutation.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.changes.subscribe()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn storage_key(&self) -> &str {
        self.repository.key()
    }

    /// Ensure actor is spawned (lazy init).
    async fn ensure_actor(&self) {
        let mut init_guard = self.actor_init.lock().await;
        if !*init_guard {
            let (tx, rx) = mpsc::channel(100);

            // Store tx BEFORE spawning
            let mut tx_guard = self.command_tx.lock().await;
            *tx_guard = Some(tx);
            drop(tx_guard);

            tokio::spawn(store_actor(
                self.name,
                rx,
                Arc::clone(&self.state),
                Arc::clone(&self.changes),
                Arc::clone(&self.defaults),
                Arc::clone(&self.repository),
            ));

            *init_guard = true;
            debug!("{} store actor spawned", self.name);
        }
    }
}

/// Store actor task.
///
/// Applies commands sequentially until every store handle is dropped.
async fn store_actor<T>(
    name: &'static str,
    mut command_rx: mpsc::Receiver<Envelope<T>>,
    state: Arc<RwLock<T>>,
    changes: Arc<watch::Sender<T>>,
    defaults: Arc<T>,
    repository: Arc<dyn FormRepository<T>>,
) where
    T: Clone + Send + Sync + 'static,
{
    debug!("{name} store actor started");

    while let Some(Envelope { command, reply }) = command_rx.recv().await {
        let label = command.label();

        // Update memory first (can't fail)
        let updated = {
            let mut state_write = state.write().await;
            match command {
                StoreCommand::Replace(record) => *state_write = record,
                StoreCommand::Modify(mutation) => mutation(&mut *state_write),
                StoreCommand::Reset => *state_write = (*defaults).clone(),
            }
            state_write.clone()
        };
        debug!("{name} {label} applied in memory");

        let saved = updated.clone();
        changes.send_replace(updated);

        // Then persist (if this fails, memory still updated)
        let outcome = repository.save(&saved);
        match outcome {
            Ok(()) => debug!("{name} saved under {}", repository.key()),
            Err(ref e) => error!("{name} updated in memory but storage write failed: {e}"),
        }

        if reply.send(outcome).is_err() {
            debug!("{name} {label} caller went away before acknowledgement");
        }
    }

    debug!("{name} store actor stopped");
}
