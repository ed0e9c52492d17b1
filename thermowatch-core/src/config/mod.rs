//! Configuration types
//!
//! Sync variant selection and messaging limits, loadable from TOML and
//! storable as postcard binary data.

#[cfg(feature = "serde")]
pub mod loader;
pub mod types;

#[cfg(feature = "serde")]
pub use loader::{ConfigError, MAX_CONFIG_SIZE};
pub use types::*;
