//! Outbound command encoder
//!
//! Turns user intents on the selected thermostat into dictionaries and
//! hands them to the outbox. Sending is fire-and-forget; the outcome
//! arrives later as an inbound acknowledgement.

use thermowatch_protocol::{DictError, OutboundMessage, OUTBOX_SIZE};

use super::error::SyncError;
use crate::config::MessagingConfig;
use crate::selection::SelectionCursor;
use crate::traits::Outbox;

/// Encoder bound to a configured outbox size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandEncoder {
    outbox_size: usize,
}

impl Default for CommandEncoder {
    fn default() -> Self {
        Self::new(&MessagingConfig::default())
    }
}

impl CommandEncoder {
    pub fn new(config: &MessagingConfig) -> Self {
        Self {
            outbox_size: (config.outbox_size as usize).min(OUTBOX_SIZE),
        }
    }

    pub fn outbox_size(&self) -> usize {
        self.outbox_size
    }

    /// Request a setpoint step of `delta` for the selected thermostat
    ///
    /// Returns the number of bytes sent.
    pub fn send_temperature_delta<O: Outbox>(
        &self,
        outbox: &mut O,
        selection: &SelectionCursor,
        delta: i8,
    ) -> Result<usize, SyncError> {
        self.send(
            outbox,
            OutboundMessage::TemperatureChange {
                thermostat_index: slot_index(selection),
                delta,
            },
        )
    }

    /// Request the next mode for the selected thermostat
    pub fn send_mode_toggle<O: Outbox>(
        &self,
        outbox: &mut O,
        selection: &SelectionCursor,
    ) -> Result<usize, SyncError> {
        self.send(
            outbox,
            OutboundMessage::ModeChange {
                thermostat_index: slot_index(selection),
            },
        )
    }

    /// Encode `message`, open the outbox, then send
    ///
    /// Nothing touches the outbox unless encoding succeeded.
    pub fn send<O: Outbox>(&self, outbox: &mut O, message: OutboundMessage) -> Result<usize, SyncError> {
        let payload = message.encode::<OUTBOX_SIZE>()?;
        if payload.len() > self.outbox_size {
            warn!(
                "Outbound message needs {} bytes, outbox holds {}",
                payload.len(),
                self.outbox_size
            );
            return Err(SyncError::Encode(DictError::BufferTooSmall));
        }

        outbox.begin().map_err(|e| {
            warn!("Outbox unavailable: {:?}", e);
            SyncError::ChannelUnavailable
        })?;
        outbox.send(&payload).map_err(|e| {
            warn!("Outbox send failed: {:?}", e);
            SyncError::ChannelUnavailable
        })?;

        debug!(
            "Sent {:?} for thermostat {} ({} bytes)",
            message.command(),
            message.thermostat_index(),
            payload.len()
        );
        Ok(payload.len())
    }
}

fn slot_index(selection: &SelectionCursor) -> u8 {
    // MAX_THERMOSTATS is far below u8::MAX
    selection.index() as u8
}
