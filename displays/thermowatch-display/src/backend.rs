//! Watch backend traits
//!
//! Defines the interface to the host's text layers, window background and
//! vibration motor.

use thermowatch_core::feedback::{Background, VibePattern};

/// Text layers of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextLayer {
    /// Thermostat name, also used for in-flight labels
    Name,
    /// Large current (or unified) temperature
    CurrentTemperature,
    /// Smaller setpoint label
    TargetTemperature,
    /// Operating mode
    Mode,
}

impl TextLayer {
    /// Every layer, in drawing order
    pub const ALL: [TextLayer; 4] = [
        TextLayer::CurrentTemperature,
        TextLayer::TargetTemperature,
        TextLayer::Name,
        TextLayer::Mode,
    ];

    /// Slot in per-layer storage
    pub const fn slot(self) -> usize {
        match self {
            TextLayer::Name => 0,
            TextLayer::CurrentTemperature => 1,
            TextLayer::TargetTemperature => 2,
            TextLayer::Mode => 3,
        }
    }
}

/// Window backend
///
/// Implementations copy or reference the text; callers may reuse their
/// buffers after the call returns.
pub trait WatchBackend {
    /// Replace the text of one layer
    fn set_text(&mut self, layer: TextLayer, text: &str);

    /// Change the window background colour
    fn set_background(&mut self, background: Background);

    /// Request a redraw of the root layer
    fn mark_dirty(&mut self);
}

/// Vibration motor queue
pub trait Haptics {
    /// Enqueue a custom on/off pattern
    fn enqueue(&mut self, pattern: VibePattern);
}

impl<T: WatchBackend + ?Sized> WatchBackend for &mut T {
    fn set_text(&mut self, layer: TextLayer, text: &str) {
        (**self).set_text(layer, text)
    }

    fn set_background(&mut self, background: Background) {
        (**self).set_background(background)
    }

    fn mark_dirty(&mut self) {
        (**self).mark_dirty()
    }
}
