//! Presentation layer traits
//!
//! The presentation layer draws the active thermostat and plays feedback.
//! It lives outside the core; these traits are the seam.

use crate::feedback::{FeedbackEffect, PendingLabel};
use crate::registry::ThermostatRecord;

/// Receiver of render and feedback requests
pub trait Presentation {
    /// Redraw every layer from `record`
    fn render(&mut self, record: &ThermostatRecord);

    /// Replace the name layer with an in-flight label, without re-rendering
    fn show_pending(&mut self, label: PendingLabel);

    /// Apply background and vibration for `effect`
    fn apply_feedback(&mut self, effect: FeedbackEffect);
}

/// Do-not-disturb predicate consulted before vibrating
pub trait QuietTime {
    fn is_active(&self) -> bool;
}

impl<F: Fn() -> bool> QuietTime for F {
    fn is_active(&self) -> bool {
        self()
    }
}

/// Quiet time that never applies
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverQuiet;

impl QuietTime for NeverQuiet {
    fn is_active(&self) -> bool {
        false
    }
}
