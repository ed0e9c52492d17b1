//! Configuration type definitions
//!
//! These types select the sync variant and the messaging buffer sizes.
//! Configuration can be parsed from TOML or stored as postcard binary data.

use thermowatch_protocol::dict::{INBOX_SIZE, OUTBOX_SIZE};
use thermowatch_protocol::Schema;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest outbox that still fits a temperature change message
pub const MIN_OUTBOX_SIZE: usize = 1 + 3 * (7 + 4);

/// Smallest inbox that still fits an index-only update
pub const MIN_INBOX_SIZE: usize = 1 + 7 + 4;

/// Which acknowledgements may trigger feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AckScope {
    /// Dispatch the command tag whenever an index is present
    #[default]
    AnyIndex,
    /// Dispatch only when the index addresses a registry slot
    ValidIndexOnly,
}

/// Sync variant capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyncCapabilities {
    /// Track current and target temperature separately
    pub separate_current_target: bool,
    /// Turn `Success` / `Failure` tags into feedback effects
    pub ack_feedback: bool,
    /// Index requirement for acknowledgement dispatch
    pub ack_scope: AckScope,
}

impl SyncCapabilities {
    /// Separate current/target temperatures with acknowledgement feedback
    pub const DUAL_TEMPERATURE: SyncCapabilities = SyncCapabilities {
        separate_current_target: true,
        ack_feedback: true,
        ack_scope: AckScope::AnyIndex,
    };

    /// Unified temperature without acknowledgement feedback
    pub const SINGLE_TEMPERATURE: SyncCapabilities = SyncCapabilities {
        separate_current_target: false,
        ack_feedback: false,
        ack_scope: AckScope::ValidIndexOnly,
    };

    /// Decoder schema matching these capabilities
    pub fn schema(&self) -> Schema {
        Schema {
            separate_current_target: self.separate_current_target,
            command_tag: self.ack_feedback,
        }
    }
}

impl Default for SyncCapabilities {
    fn default() -> Self {
        Self::DUAL_TEMPERATURE
    }
}

/// Message buffer sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MessagingConfig {
    /// Largest accepted inbound message in bytes
    pub inbox_size: u16,
    /// Largest outbound message in bytes
    pub outbox_size: u16,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            inbox_size: INBOX_SIZE as u16,
            outbox_size: OUTBOX_SIZE as u16,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// Inbox size outside `[MIN_INBOX_SIZE, INBOX_SIZE]`
    InboxSize(u16),
    /// Outbox size outside `[MIN_OUTBOX_SIZE, OUTBOX_SIZE]`
    OutboxSize(u16),
}

impl MessagingConfig {
    /// Check both sizes against the fixed buffer capacities
    pub fn validate(&self) -> Result<(), ValidationError> {
        let inbox = self.inbox_size as usize;
        if !(MIN_INBOX_SIZE..=INBOX_SIZE).contains(&inbox) {
            return Err(ValidationError::InboxSize(self.inbox_size));
        }
        let outbox = self.outbox_size as usize;
        if !(MIN_OUTBOX_SIZE..=OUTBOX_SIZE).contains(&outbox) {
            return Err(ValidationError::OutboxSize(self.outbox_size));
        }
        Ok(())
    }

    /// Copy with both sizes forced into their accepted ranges
    pub fn clamped(&self) -> Self {
        Self {
            inbox_size: self
                .inbox_size
                .clamp(MIN_INBOX_SIZE as u16, INBOX_SIZE as u16),
            outbox_size: self
                .outbox_size
                .clamp(MIN_OUTBOX_SIZE as u16, OUTBOX_SIZE as u16),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppConfig {
    pub capabilities: SyncCapabilities,
    pub messaging: MessagingConfig,
}

impl AppConfig {
    /// Configuration for a given sync variant with default buffers
    pub fn with_capabilities(capabilities: SyncCapabilities) -> Self {
        Self {
            capabilities,
            messaging: MessagingConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.messaging.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermowatch_protocol::dict::calc_buffer_size;

    #[test]
    fn test_minimums_match_wire_layout() {
        assert_eq!(MIN_OUTBOX_SIZE, calc_buffer_size(&[4, 4, 4]));
        assert_eq!(MIN_INBOX_SIZE, calc_buffer_size(&[4]));
    }

    #[test]
    fn test_default_is_dual_temperature() {
        let config = AppConfig::default();
        assert_eq!(config.capabilities, SyncCapabilities::DUAL_TEMPERATURE);
        assert_eq!(config.messaging.inbox_size, 64);
        assert_eq!(config.messaging.outbox_size, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_schema_follows_capabilities() {
        assert_eq!(
            SyncCapabilities::DUAL_TEMPERATURE.schema(),
            Schema::DUAL_TEMPERATURE
        );
        assert_eq!(
            SyncCapabilities::SINGLE_TEMPERATURE.schema(),
            Schema::SINGLE_TEMPERATURE
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_sizes() {
        let mut config = AppConfig::default();
        config.messaging.outbox_size = 128;
        assert_eq!(config.validate(), Err(ValidationError::OutboxSize(128)));

        config.messaging.outbox_size = 20;
        assert_eq!(config.validate(), Err(ValidationError::OutboxSize(20)));

        config.messaging.outbox_size = 64;
        config.messaging.inbox_size = 0;
        assert_eq!(config.validate(), Err(ValidationError::InboxSize(0)));
    }

    #[test]
    fn test_clamped_sizes_validate() {
        let messaging = MessagingConfig {
            inbox_size: 0,
            outbox_size: 500,
        }
        .clamped();
        assert_eq!(messaging.inbox_size as usize, MIN_INBOX_SIZE);
        assert_eq!(messaging.outbox_size as usize, OUTBOX_SIZE);
        assert!(messaging.validate().is_ok());

        let defaults = MessagingConfig::default();
        assert_eq!(defaults.clamped(), defaults);
    }
}
