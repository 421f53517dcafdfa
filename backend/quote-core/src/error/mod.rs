pub mod config;
pub mod storage;
pub mod store;

pub use config::ConfigError;
pub use storage::StorageError;
pub use store::StoreError;
