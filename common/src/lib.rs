//! Shared building blocks for the agency site workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error-site tracking used by every layer
//! - **models**: Pure data structures (alerts, quote forms)
//! - **quote-core**: Stores, storage and configuration operating on models
//! - **agency-site**: Application wiring everything together

pub mod error;

pub use error::error_location::ErrorLocation;

#[cfg(test)]
mod tests;
