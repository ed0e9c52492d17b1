//! Watch controller
//!
//! Owns the watch state and the outbox. Button events and inbound bytes go
//! in; a [`Reaction`] describing what the presentation layer should do
//! comes out. Sync errors are logged and swallowed here, the last one is
//! kept for inspection.

use thermowatch_protocol::{ButtonEvent, InboundMessage};

use crate::config::AppConfig;
use crate::feedback::{FeedbackEffect, PendingLabel};
use crate::registry::ThermostatRecord;
use crate::state::{Intent, WatchState};
use crate::sync::{self, CommandEncoder, SyncError, SyncReport};
use crate::traits::{Outbox, Presentation};

/// Presentation work requested by one event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reaction {
    /// Redraw the active record
    pub render: bool,
    /// Background/vibration to apply
    pub feedback: Option<FeedbackEffect>,
    /// In-flight label for the name layer
    pub pending: Option<PendingLabel>,
}

impl Reaction {
    /// Nothing to do
    pub const NONE: Reaction = Reaction {
        render: false,
        feedback: None,
        pending: None,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Replay this reaction on `presentation`
    ///
    /// Order: pending label, feedback, render.
    pub fn apply<P: Presentation + ?Sized>(&self, record: &ThermostatRecord, presentation: &mut P) {
        if let Some(label) = self.pending {
            presentation.show_pending(label);
        }
        if let Some(effect) = self.feedback {
            presentation.apply_feedback(effect);
        }
        if self.render {
            presentation.render(record);
        }
    }
}

/// Single owner of the watch state
pub struct Controller<O: Outbox> {
    state: WatchState,
    encoder: CommandEncoder,
    outbox: O,
    inbox_size: usize,
    last_error: Option<SyncError>,
}

impl<O: Outbox> Controller<O> {
    /// Create a controller from `config`
    ///
    /// Buffer sizes outside the accepted range are clamped into it.
    pub fn new(config: AppConfig, outbox: O) -> Self {
        if let Err(e) = config.validate() {
            warn!("Messaging sizes out of range, clamping: {:?}", e);
        }
        let messaging = config.messaging.clamped();
        Self {
            state: WatchState::new(config.capabilities),
            encoder: CommandEncoder::new(&messaging),
            outbox,
            inbox_size: messaging.inbox_size as usize,
            last_error: None,
        }
    }

    /// Initial reaction: draw the placeholder record
    pub fn boot(&self) -> Reaction {
        info!(
            "Watch started, separate target: {}",
            self.state.capabilities().separate_current_target
        );
        Reaction {
            render: true,
            ..Reaction::NONE
        }
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    pub fn outbox(&self) -> &O {
        &self.outbox
    }

    pub fn outbox_mut(&mut self) -> &mut O {
        &mut self.outbox
    }

    /// Record the presentation layer should show
    pub fn active_record(&self) -> &ThermostatRecord {
        self.state.active_record()
    }

    /// Most recent swallowed sync error
    pub fn last_error(&self) -> Option<SyncError> {
        self.last_error
    }

    /// Handle a button press
    pub fn process_input(&mut self, event: ButtonEvent) -> Reaction {
        trace!("Button {:?}", event);
        self.handle_intent(Intent::from_button(event))
    }

    pub fn handle_intent(&mut self, intent: Intent) -> Reaction {
        match intent {
            Intent::RaiseTemperature | Intent::LowerTemperature => {
                let delta = intent.temperature_delta();
                let selection = self.state.selection();
                let result = self
                    .encoder
                    .send_temperature_delta(&mut self.outbox, &selection, delta);
                self.record(result);
                // Shown even when the send failed; cleared by the next render
                Reaction {
                    pending: PendingLabel::for_delta(delta),
                    ..Reaction::NONE
                }
            }
            Intent::ToggleMode => {
                let selection = self.state.selection();
                let result = self.encoder.send_mode_toggle(&mut self.outbox, &selection);
                self.record(result);
                Reaction::NONE
            }
            Intent::NextThermostat => {
                let index = self.state.advance_selection();
                debug!("Selected thermostat {}", index);
                // Single-temperature setups carry no feedback at all
                let feedback = if self.state.capabilities().ack_feedback {
                    Some(FeedbackEffect::Overflow)
                } else {
                    None
                };
                Reaction {
                    render: true,
                    feedback,
                    pending: None,
                }
            }
        }
    }

    /// Handle raw inbox bytes
    ///
    /// Oversized or undecodable payloads are dropped without a render.
    pub fn process_inbox(&mut self, bytes: &[u8]) -> Reaction {
        if bytes.len() > self.inbox_size {
            warn!(
                "Inbound message of {} bytes exceeds inbox of {}",
                bytes.len(),
                self.inbox_size
            );
            self.last_error = Some(SyncError::MalformedMessage);
            return Reaction::NONE;
        }

        let schema = self.state.capabilities().schema();
        match InboundMessage::from_bytes(bytes, schema) {
            Ok(message) => self.process_message(&message),
            Err(e) => {
                warn!("Inbound dictionary rejected: {:?}", e);
                self.last_error = Some(SyncError::MalformedMessage);
                Reaction::NONE
            }
        }
    }

    /// Handle a decoded inbound message
    pub fn process_message(&mut self, message: &InboundMessage<'_>) -> Reaction {
        match sync::apply(&mut self.state, message) {
            Ok(report) => self.react_to(report),
            Err(e) => {
                self.last_error = Some(e);
                Reaction::NONE
            }
        }
    }

    fn react_to(&mut self, report: SyncReport) -> Reaction {
        if let Some(issue) = report.issues.last() {
            self.last_error = Some(*issue);
        }
        Reaction {
            render: true,
            feedback: report.feedback,
            pending: None,
        }
    }

    fn record(&mut self, result: Result<usize, SyncError>) {
        if let Err(e) = result {
            self.last_error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AckScope, SyncCapabilities};
    use crate::traits::transport::mock::MockOutbox;
    use thermowatch_protocol::{
        Command, Dictionary, OutboundMessage, Schema, INBOX_SIZE, OUTBOX_SIZE,
    };

    #[derive(Debug, Default)]
    struct Log {
        calls: std::vec::Vec<std::string::String>,
    }

    impl Presentation for Log {
        fn render(&mut self, record: &ThermostatRecord) {
            self.calls.push(format!("render {}", record.name));
        }

        fn show_pending(&mut self, label: PendingLabel) {
            self.calls.push(format!("pending {}", label.text()));
        }

        fn apply_feedback(&mut self, effect: FeedbackEffect) {
            self.calls.push(format!("feedback {:?}", effect));
        }
    }

    fn controller() -> Controller<MockOutbox> {
        Controller::new(AppConfig::default(), MockOutbox::connected())
    }

    fn inbound(message: InboundMessage<'_>) -> heapless::Vec<u8, INBOX_SIZE> {
        message.encode(Schema::DUAL_TEMPERATURE).unwrap()
    }

    #[test]
    fn test_boot_renders_defaults() {
        let controller = controller();
        let reaction = controller.boot();
        assert!(reaction.render);
        assert_eq!(controller.active_record().name, "Loading ...");
        assert_eq!(controller.active_record().mode, "OFF");
    }

    #[test]
    fn test_raise_sends_and_shows_pending() {
        let mut controller = controller();
        let reaction = controller.process_input(ButtonEvent::Up);

        assert_eq!(reaction.pending, Some(PendingLabel::Raising));
        assert!(!reaction.render);

        let dict = Dictionary::parse(&controller.outbox().sent[0]).unwrap();
        assert_eq!(
            OutboundMessage::decode(&dict),
            Some(OutboundMessage::TemperatureChange {
                thermostat_index: 0,
                delta: 1
            })
        );
    }

    #[test]
    fn test_raise_then_success() {
        let mut controller = controller();
        controller.process_input(ButtonEvent::Up);

        let bytes = inbound(InboundMessage {
            command: Some(Command::Success),
            thermostat_index: Some(0),
            current_temperature: Some("72°"),
            ..Default::default()
        });
        let reaction = controller.process_inbox(&bytes);

        assert!(reaction.render);
        assert_eq!(reaction.feedback, Some(FeedbackEffect::Success));
        assert_eq!(controller.active_record().current_temperature, "72°");
        assert_eq!(controller.last_error(), None);
    }

    #[test]
    fn test_mode_toggle_with_unavailable_channel() {
        let mut controller = Controller::new(AppConfig::default(), MockOutbox::disconnected());
        let before = controller.state().clone();

        let reaction = controller.process_input(ButtonEvent::Select);

        assert!(reaction.is_none());
        assert_eq!(*controller.state(), before);
        assert!(controller.outbox().sent.is_empty());
        assert_eq!(controller.last_error(), Some(SyncError::ChannelUnavailable));
    }

    #[test]
    fn test_pending_shown_even_when_send_fails() {
        let mut controller = Controller::new(AppConfig::default(), MockOutbox::disconnected());
        let reaction = controller.process_input(ButtonEvent::Down);
        assert_eq!(reaction.pending, Some(PendingLabel::Lowering));
    }

    #[test]
    fn test_long_select_cycles_with_overflow_feedback() {
        let mut controller = controller();
        let reaction = controller.process_input(ButtonEvent::LongSelect);

        assert!(reaction.render);
        assert_eq!(reaction.feedback, Some(FeedbackEffect::Overflow));
        assert_eq!(controller.state().selection().index(), 1);

        controller.process_input(ButtonEvent::LongSelect);
        assert_eq!(controller.state().selection().index(), 0);
        assert!(controller.outbox().sent.is_empty());
    }

    #[test]
    fn test_long_select_silent_without_ack_feedback() {
        let mut controller = Controller::new(
            AppConfig::with_capabilities(SyncCapabilities::SINGLE_TEMPERATURE),
            MockOutbox::connected(),
        );
        let reaction = controller.process_input(ButtonEvent::LongSelect);

        assert!(reaction.render);
        assert_eq!(reaction.feedback, None);
        assert_eq!(controller.state().selection().index(), 1);
    }

    #[test]
    fn test_zero_inbox_size_is_clamped() {
        let mut config = AppConfig::default();
        config.messaging.inbox_size = 0;
        config.messaging.outbox_size = 1000;
        let mut controller = Controller::new(config, MockOutbox::connected());

        let index_only = inbound(InboundMessage {
            thermostat_index: Some(0),
            ..Default::default()
        });
        assert_eq!(index_only.len(), crate::config::MIN_INBOX_SIZE);
        assert!(controller.process_inbox(&index_only).render);

        let with_name = inbound(InboundMessage {
            thermostat_index: Some(0),
            thermostat_name: Some("Hall"),
            ..Default::default()
        });
        assert!(controller.process_inbox(&with_name).is_none());

        controller.process_input(ButtonEvent::Up);
        assert_eq!(controller.outbox().sent.len(), 1);
    }

    #[test]
    fn test_message_without_index_is_not_rendered() {
        let mut controller = controller();
        let before = controller.state().clone();
        let bytes = inbound(InboundMessage {
            thermostat_name: Some("Nowhere"),
            ..Default::default()
        });

        assert!(controller.process_inbox(&bytes).is_none());
        assert_eq!(*controller.state(), before);
        assert_eq!(controller.last_error(), Some(SyncError::MalformedMessage));
    }

    #[test]
    fn test_out_of_range_still_renders_and_acks() {
        let mut controller = controller();
        let before = controller.state().clone();
        let bytes = inbound(InboundMessage {
            command: Some(Command::Failure),
            thermostat_index: Some(9),
            thermostat_name: Some("Attic"),
            ..Default::default()
        });

        let reaction = controller.process_inbox(&bytes);
        assert!(reaction.render);
        assert_eq!(reaction.feedback, Some(FeedbackEffect::Failure));
        assert_eq!(*controller.state(), before);
        assert_eq!(
            controller.last_error(),
            Some(SyncError::IndexOutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_valid_index_only_scope_suppresses_ack() {
        let config = AppConfig::with_capabilities(SyncCapabilities {
            ack_scope: AckScope::ValidIndexOnly,
            ..SyncCapabilities::DUAL_TEMPERATURE
        });
        let mut controller = Controller::new(config, MockOutbox::connected());
        let bytes = inbound(InboundMessage {
            command: Some(Command::Success),
            thermostat_index: Some(5),
            ..Default::default()
        });

        let reaction = controller.process_inbox(&bytes);
        assert!(reaction.render);
        assert_eq!(reaction.feedback, None);
    }

    #[test]
    fn test_garbage_and_oversized_inbox_dropped() {
        let mut controller = controller();
        assert!(controller.process_inbox(&[3, 0x10]).is_none());
        assert!(controller.process_inbox(&[0u8; INBOX_SIZE + 1]).is_none());
        assert_eq!(controller.last_error(), Some(SyncError::MalformedMessage));
    }

    #[test]
    fn test_single_temperature_scenario() {
        let mut controller = Controller::new(
            AppConfig::with_capabilities(SyncCapabilities::SINGLE_TEMPERATURE),
            MockOutbox::connected(),
        );
        let bytes: heapless::Vec<u8, INBOX_SIZE> = InboundMessage {
            thermostat_index: Some(1),
            thermostat_name: Some("Living Room"),
            current_temperature: Some("68°"),
            thermostat_mode: Some("HEAT"),
            ..Default::default()
        }
        .encode(Schema::SINGLE_TEMPERATURE)
        .unwrap();

        let reaction = controller.process_inbox(&bytes);
        assert!(reaction.render);
        assert_eq!(reaction.feedback, None);

        let registry = controller.state().registry();
        assert_eq!(registry.get(1).unwrap().name, "Living Room");
        assert_eq!(registry.get(1).unwrap().temperature(), "68°");
        assert_eq!(registry.get(1).unwrap().mode, "HEAT");
        assert_eq!(registry.get(0).unwrap().name, "Loading ...");
    }

    #[test]
    fn test_reaction_apply_order() {
        let mut log = Log::default();
        let reaction = Reaction {
            render: true,
            feedback: Some(FeedbackEffect::Success),
            pending: Some(PendingLabel::Raising),
        };
        reaction.apply(&ThermostatRecord::default(), &mut log);

        assert_eq!(
            log.calls,
            [
                "pending Raising ...",
                "feedback Success",
                "render Loading ...",
            ]
        );
    }

    #[test]
    fn test_outbox_payload_fits_buffer() {
        let mut controller = controller();
        controller.process_input(ButtonEvent::Up);
        assert!(controller.outbox().sent[0].len() <= OUTBOX_SIZE);
    }
}
