//! Domain models for the agency site.
//!
//! Pure data structures for the alert banner and the two quote forms.
//! Models carry defaults and serde mappings but no store behaviour; the
//! stores that own and persist them live in `quote-core`.

pub mod alert;
pub mod error;
pub mod forms;

pub use alert::builder::AlertBuilder;
pub use alert::{Alert, AlertKind, AlertState, Icon};
pub use error::model_error::ModelError;
pub use forms::commercial::CommercialFormData;
pub use forms::home::{CoverageForm, HomeForm, HomeFormData, OwnerForm};

pub use common::ErrorLocation;

#[cfg(test)]
mod tests;
