//! Presentation adapter
//!
//! Draws the active thermostat on a [`WatchBackend`] and plays feedback
//! through [`Haptics`], respecting the host's quiet time.

use thermowatch_core::config::SyncCapabilities;
use thermowatch_core::feedback::{FeedbackEffect, PendingLabel};
use thermowatch_core::registry::ThermostatRecord;
use thermowatch_core::traits::{Presentation, QuietTime};

use crate::backend::{Haptics, TextLayer, WatchBackend};

pub struct Presenter<B, H, Q> {
    backend: B,
    haptics: H,
    quiet: Q,
    /// Target layer is only drawn when the phone sends it
    show_target: bool,
}

impl<B: WatchBackend, H: Haptics, Q: QuietTime> Presenter<B, H, Q> {
    pub fn new(backend: B, haptics: H, quiet: Q, capabilities: &SyncCapabilities) -> Self {
        Self {
            backend,
            haptics,
            quiet,
            show_target: capabilities.separate_current_target,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// Give back the backend, haptics and quiet-time source
    pub fn into_parts(self) -> (B, H, Q) {
        (self.backend, self.haptics, self.quiet)
    }
}

impl<B: WatchBackend, H: Haptics, Q: QuietTime> Presentation for Presenter<B, H, Q> {
    fn render(&mut self, record: &ThermostatRecord) {
        self.backend
            .set_text(TextLayer::CurrentTemperature, record.temperature());
        if self.show_target {
            self.backend
                .set_text(TextLayer::TargetTemperature, record.target_temperature.as_str());
        }
        self.backend.set_text(TextLayer::Name, record.name.as_str());
        self.backend.set_text(TextLayer::Mode, record.mode.as_str());
    }

    fn show_pending(&mut self, label: PendingLabel) {
        self.backend.set_text(TextLayer::Name, label.text());
    }

    fn apply_feedback(&mut self, effect: FeedbackEffect) {
        if let Some(background) = effect.background() {
            self.backend.set_background(background);
            self.backend.mark_dirty();
        }
        if !self.quiet.is_active() {
            self.haptics.enqueue(effect.vibe_pattern());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{Screen, VibeLog};
    use thermowatch_core::feedback::{Background, VibePattern};
    use thermowatch_core::traits::NeverQuiet;

    fn presenter(
        capabilities: SyncCapabilities,
    ) -> Presenter<Screen, VibeLog, NeverQuiet> {
        Presenter::new(Screen::new(), VibeLog::new(), NeverQuiet, &capabilities)
    }

    #[test]
    fn test_render_defaults() {
        let mut presenter = presenter(SyncCapabilities::DUAL_TEMPERATURE);
        presenter.render(&ThermostatRecord::default());

        let screen = presenter.backend();
        assert_eq!(screen.text(TextLayer::Name), "Loading ...");
        assert_eq!(screen.text(TextLayer::CurrentTemperature), "0°");
        assert_eq!(screen.text(TextLayer::TargetTemperature), "0°");
        assert_eq!(screen.text(TextLayer::Mode), "OFF");
    }

    #[test]
    fn test_single_temperature_skips_target_layer() {
        let mut presenter = presenter(SyncCapabilities::SINGLE_TEMPERATURE);
        presenter.render(&ThermostatRecord::default());
        assert_eq!(presenter.backend().text(TextLayer::TargetTemperature), "");
    }

    #[test]
    fn test_pending_only_touches_name() {
        let mut presenter = presenter(SyncCapabilities::DUAL_TEMPERATURE);
        presenter.render(&ThermostatRecord::default());
        presenter.show_pending(PendingLabel::Lowering);

        let screen = presenter.backend();
        assert_eq!(screen.text(TextLayer::Name), "Lowering ...");
        assert_eq!(screen.text(TextLayer::Mode), "OFF");
    }

    #[test]
    fn test_feedback_backgrounds_and_patterns() {
        let mut presenter = presenter(SyncCapabilities::DUAL_TEMPERATURE);

        presenter.apply_feedback(FeedbackEffect::Failure);
        assert_eq!(presenter.backend().background(), Background::Alert);
        assert_eq!(presenter.haptics().last(), Some(VibePattern::LONG));

        presenter.apply_feedback(FeedbackEffect::Overflow);
        assert_eq!(presenter.backend().background(), Background::Alert);
        assert_eq!(presenter.haptics().last(), Some(VibePattern::OVERFLOW));

        presenter.apply_feedback(FeedbackEffect::Success);
        assert_eq!(presenter.backend().background(), Background::Neutral);
        assert_eq!(presenter.haptics().last(), Some(VibePattern::SHORT));
    }

    #[test]
    fn test_quiet_time_mutes_every_pattern() {
        let mut presenter = Presenter::new(
            Screen::new(),
            VibeLog::new(),
            || true,
            &SyncCapabilities::DUAL_TEMPERATURE,
        );

        presenter.apply_feedback(FeedbackEffect::Failure);
        presenter.apply_feedback(FeedbackEffect::Overflow);

        assert_eq!(presenter.backend().background(), Background::Alert);
        assert!(presenter.haptics().patterns().is_empty());
    }
}
