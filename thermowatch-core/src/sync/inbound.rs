//! Inbound sync handler
//!
//! Applies a sparse phone update to one registry slot and derives the
//! feedback effect of its acknowledgement tag.

use heapless::Vec;
use thermowatch_protocol::InboundMessage;

use super::error::SyncError;
use crate::config::{AckScope, SyncCapabilities};
use crate::feedback::FeedbackEffect;
use crate::registry::{Field, UpdateOutcome};
use crate::state::WatchState;

/// Outcome of an applied (not discarded) inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SyncReport {
    /// Index carried by the message
    pub index: u32,
    /// Fields written, in application order
    pub applied: Vec<Field, 4>,
    /// Non-fatal problems: out-of-range index or truncated fields
    pub issues: Vec<SyncError, 4>,
    /// Feedback requested by the acknowledgement tag
    pub feedback: Option<FeedbackEffect>,
}

impl SyncReport {
    fn new(index: u32) -> Self {
        Self {
            index,
            applied: Vec::new(),
            issues: Vec::new(),
            feedback: None,
        }
    }

    /// Check if every present field was stored as sent
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Fields whose values were truncated
    pub fn truncated(&self) -> impl Iterator<Item = Field> + '_ {
        self.issues.iter().filter_map(|issue| match issue {
            SyncError::FieldOverflow { field } => Some(*field),
            _ => None,
        })
    }
}

/// Apply `message` to `state`
///
/// - No index: the message is discarded (`MalformedMessage`), nothing
///   changes and no render should follow.
/// - Index in range: every present field is written; absent fields stay.
/// - Index out of range: no field is written; the acknowledgement tag is
///   still dispatched when the scope is `AckScope::AnyIndex`.
pub fn apply(state: &mut WatchState, message: &InboundMessage<'_>) -> Result<SyncReport, SyncError> {
    let Some(index) = message.thermostat_index else {
        debug!("Inbound message without thermostat index, dropped");
        return Err(SyncError::MalformedMessage);
    };

    let capabilities = state.capabilities();
    let mut report = SyncReport::new(index);
    let slot = usize::try_from(index)
        .ok()
        .filter(|&slot| state.registry().contains(slot));

    match slot {
        Some(slot) => {
            for (field, value) in field_updates(message, capabilities) {
                match state.registry_mut().update_field(slot, field, value) {
                    UpdateOutcome::Stored => {
                        let _ = report.applied.push(field);
                    }
                    UpdateOutcome::Truncated => {
                        warn!("Field {:?} of thermostat {} truncated", field, slot);
                        let _ = report.applied.push(field);
                        let _ = report.issues.push(SyncError::FieldOverflow { field });
                    }
                    UpdateOutcome::OutOfRange => {
                        let _ = report.issues.push(SyncError::IndexOutOfRange { index });
                        break;
                    }
                }
            }
            trace!("Applied {} fields to thermostat {}", report.applied.len(), slot);
        }
        None => {
            warn!("Thermostat index {} out of range, fields skipped", index);
            let _ = report.issues.push(SyncError::IndexOutOfRange { index });
        }
    }

    let ack_allowed = slot.is_some() || capabilities.ack_scope == AckScope::AnyIndex;
    if capabilities.ack_feedback && ack_allowed {
        report.feedback = message.command.and_then(FeedbackEffect::from_command);
    }

    Ok(report)
}

/// Present fields of `message`, in registry field order
fn field_updates<'m>(
    message: &InboundMessage<'m>,
    capabilities: SyncCapabilities,
) -> impl Iterator<Item = (Field, &'m str)> {
    let target = if capabilities.separate_current_target {
        message.target_temperature
    } else {
        None
    };

    [
        (Field::Name, message.thermostat_name),
        (Field::CurrentTemperature, message.current_temperature),
        (Field::TargetTemperature, target),
        (Field::Mode, message.thermostat_mode),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|value| (field, value)))
}
