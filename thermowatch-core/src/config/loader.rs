//! Configuration loading and persistence
//!
//! TOML is the human-edited source format; postcard is the compact binary
//! form kept by the host application between launches.

use super::types::{AppConfig, ValidationError};

/// Upper bound on the postcard encoding of `AppConfig`
pub const MAX_CONFIG_SIZE: usize = 16;

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML syntax error or unknown value
    TomlParse,
    /// Binary encoding failed (buffer too small)
    Serialize,
    /// Binary data is corrupt or from an incompatible layout
    Deserialize,
    /// Values parsed but out of range
    Invalid(ValidationError),
}

impl From<ValidationError> for ConfigError {
    fn from(e: ValidationError) -> Self {
        ConfigError::Invalid(e)
    }
}

/// Parse and validate a TOML configuration
///
/// Missing sections and keys fall back to their defaults.
///
/// ```toml
/// [capabilities]
/// separate_current_target = true
/// ack_feedback = true
/// ack_scope = "any_index"
///
/// [messaging]
/// inbox_size = 64
/// outbox_size = 64
/// ```
pub fn parse_toml(input: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(input).map_err(|_| {
        warn!("Failed to parse TOML configuration");
        ConfigError::TomlParse
    })?;
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Serialize a configuration into `buffer`, returning the used prefix
pub fn to_bytes<'b>(config: &AppConfig, buffer: &'b mut [u8]) -> Result<&'b [u8], ConfigError> {
    postcard::to_slice(config, buffer)
        .map(|used| &*used)
        .map_err(|_| ConfigError::Serialize)
}

/// Deserialize and validate a stored configuration
pub fn from_bytes(bytes: &[u8]) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = postcard::from_bytes(bytes).map_err(|_| {
        warn!("Stored configuration is unreadable ({} bytes)", bytes.len());
        ConfigError::Deserialize
    })?;
    config.validate()?;
    Ok(config)
}
