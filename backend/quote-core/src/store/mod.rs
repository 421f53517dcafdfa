//! Client-side state containers.
//!
//! Each store is an explicit instance owned by the composition root and
//! handed to whoever renders or edits its state. There are no globals.
//!
//! - [`AlertStore`] - the notification banner, with a delayed reveal
//! - [`CommercialFormStore`] - the commercial quote form, persisted
//! - [`HomeFormStore`] - the three-part home quote form, persisted
//!
//! Readers either take a [`snapshot`](CommercialFormStore::get_commercial_form)
//! or hold a `watch::Receiver` from `subscribe()` and react to changes. Stores
//! never call back into their readers.

pub mod alert;
pub mod commercial;
pub mod home;
pub mod persisted;

pub use alert::AlertStore;
pub use commercial::CommercialFormStore;
pub use home::HomeFormStore;
pub use persisted::{PersistedStore, StoreCommand};
