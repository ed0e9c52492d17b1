//! Sync error taxonomy
//!
//! None of these reach the user: the controller logs and drops them.
//! They are returned so each failure mode can be observed in isolation.

use thermowatch_protocol::DictError;

use crate::registry::Field;

/// Errors raised while syncing with the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncError {
    /// Inbound message without a thermostat index, or not decodable
    MalformedMessage,
    /// Inbound index does not address a registry slot
    IndexOutOfRange { index: u32 },
    /// Outbox could not be opened or refused the message
    ChannelUnavailable,
    /// Inbound text exceeded the field capacity and was truncated
    FieldOverflow { field: Field },
    /// Outbound message could not be encoded
    Encode(DictError),
}

impl From<DictError> for SyncError {
    fn from(e: DictError) -> Self {
        SyncError::Encode(e)
    }
}
