pub mod config;
pub mod error;
pub mod storage;
pub mod store;

#[cfg(test)]
mod tests;

/// Storage key of the persisted commercial insurance form.
pub const COMMERCIAL_FORM_STORAGE_KEY: &str = "CommercialInsuranceForm";

/// Storage key of the persisted home insurance form.
pub const HOME_FORM_STORAGE_KEY: &str = "homeInsuranceForm";

/// Delay between hiding the banner and revealing a new alert.
pub const DEFAULT_ALERT_REVEAL_DELAY_MS: u64 = 100;
