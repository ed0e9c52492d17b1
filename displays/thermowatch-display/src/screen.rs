//! In-memory screen
//!
//! Holds the text of every layer, the background and a dirty flag. Used on
//! the host and in tests in place of the watch window.

use heapless::{String, Vec};
use thermowatch_core::feedback::{Background, VibePattern};
use thermowatch_core::registry::record::NAME_CAPACITY;

use crate::backend::{Haptics, TextLayer, WatchBackend};

/// Maximum bytes per layer
pub const LAYER_LEN: usize = NAME_CAPACITY;

/// Number of text layers
pub const LAYER_COUNT: usize = TextLayer::ALL.len();

/// Screen state mirrored from the backend calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Current text per layer, indexed by `TextLayer::slot`
    layers: [String<LAYER_LEN>; LAYER_COUNT],
    background: Background,
    /// Whether the window needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a blank screen with the neutral background
    pub fn new() -> Self {
        Self {
            layers: core::array::from_fn(|_| String::new()),
            background: Background::Neutral,
            dirty: true,
        }
    }

    /// Text currently shown on `layer`
    pub fn text(&self, layer: TextLayer) -> &str {
        self.layers[layer.slot()].as_str()
    }

    pub fn background(&self) -> Background {
        self.background
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl WatchBackend for Screen {
    fn set_text(&mut self, layer: TextLayer, text: &str) {
        let line = &mut self.layers[layer.slot()];
        line.clear();
        for c in text.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.dirty = true;
    }

    fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Maximum patterns remembered by `VibeLog`
pub const VIBE_LOG_LEN: usize = 8;

/// Haptics stand-in that records enqueued patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VibeLog {
    patterns: Vec<VibePattern, VIBE_LOG_LEN>,
}

impl VibeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patterns enqueued so far, oldest first
    pub fn patterns(&self) -> &[VibePattern] {
        &self.patterns
    }

    pub fn last(&self) -> Option<VibePattern> {
        self.patterns.last().copied()
    }
}

impl Haptics for VibeLog {
    fn enqueue(&mut self, pattern: VibePattern) {
        if self.patterns.is_full() {
            self.patterns.remove(0);
        }
        let _ = self.patterns.push(pattern);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.layers.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "] {}", self.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_screen_is_blank_and_dirty() {
        let screen = Screen::new();
        for layer in TextLayer::ALL {
            assert_eq!(screen.text(layer), "");
        }
        assert_eq!(screen.background(), Background::Neutral);
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_set_text_replaces_layer() {
        let mut screen = Screen::new();
        screen.mark_clean();
        screen.set_text(TextLayer::Mode, "HEAT");
        screen.set_text(TextLayer::Mode, "OFF");
        assert_eq!(screen.text(TextLayer::Mode), "OFF");
        assert_eq!(screen.text(TextLayer::Name), "");
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_long_text_is_cut() {
        let mut screen = Screen::new();
        let long = "x".repeat(LAYER_LEN + 10);
        screen.set_text(TextLayer::Name, &long);
        assert_eq!(screen.text(TextLayer::Name).len(), LAYER_LEN);
    }

    #[test]
    fn test_vibe_log_keeps_latest() {
        let mut log = VibeLog::new();
        for _ in 0..VIBE_LOG_LEN {
            log.enqueue(VibePattern::SHORT);
        }
        log.enqueue(VibePattern::LONG);
        assert_eq!(log.patterns().len(), VIBE_LOG_LEN);
        assert_eq!(log.last(), Some(VibePattern::LONG));
    }
}
