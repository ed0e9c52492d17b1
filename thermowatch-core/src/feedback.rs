//! Feedback effects produced by the core
//!
//! The core never touches the screen or the vibration motor. It returns
//! effect values which the presentation layer applies, consulting its
//! quiet-time predicate before vibrating.

use thermowatch_protocol::Command;

/// Window background states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Background {
    /// Normal/affirmative state (black)
    #[default]
    Neutral,
    /// Last command failed (dark gray)
    Alert,
}

/// Custom vibration pattern: alternating on/off segment durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VibePattern {
    pub durations_ms: &'static [u32],
}

impl VibePattern {
    /// Single short pulse
    pub const SHORT: VibePattern = VibePattern {
        durations_ms: &[50],
    };
    /// Three evenly spaced segments
    pub const LONG: VibePattern = VibePattern {
        durations_ms: &[40, 40, 40],
    };
    /// Pulse, pause, pulse
    pub const OVERFLOW: VibePattern = VibePattern {
        durations_ms: &[40, 100, 40],
    };

    /// Total pattern length
    pub fn total_ms(&self) -> u32 {
        self.durations_ms.iter().sum()
    }
}

/// Side effect requested by a sync or selection step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedbackEffect {
    /// Phone acknowledged a change
    Success,
    /// Phone reported a failed change
    Failure,
    /// Selection cursor moved to another thermostat
    Overflow,
}

impl FeedbackEffect {
    /// Effect for an acknowledgement tag; `None` for non-ack commands
    pub fn from_command(command: Command) -> Option<Self> {
        match command {
            Command::Success => Some(FeedbackEffect::Success),
            Command::Failure => Some(FeedbackEffect::Failure),
            Command::TempChange | Command::ModeChange => None,
        }
    }

    /// Background to switch to, if any
    pub fn background(&self) -> Option<Background> {
        match self {
            FeedbackEffect::Success => Some(Background::Neutral),
            FeedbackEffect::Failure => Some(Background::Alert),
            FeedbackEffect::Overflow => None,
        }
    }

    /// Vibration to enqueue outside quiet time
    pub fn vibe_pattern(&self) -> VibePattern {
        match self {
            FeedbackEffect::Success => VibePattern::SHORT,
            FeedbackEffect::Failure => VibePattern::LONG,
            FeedbackEffect::Overflow => VibePattern::OVERFLOW,
        }
    }
}

/// Optimistic label shown while a temperature change is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PendingLabel {
    Raising,
    Lowering,
}

impl PendingLabel {
    /// Label for a setpoint step; `None` for a zero step
    pub fn for_delta(delta: i8) -> Option<Self> {
        match delta {
            d if d > 0 => Some(PendingLabel::Raising),
            d if d < 0 => Some(PendingLabel::Lowering),
            _ => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            PendingLabel::Raising => "Raising ...",
            PendingLabel::Lowering => "Lowering ...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_commands_map_to_effects() {
        assert_eq!(
            FeedbackEffect::from_command(Command::Success),
            Some(FeedbackEffect::Success)
        );
        assert_eq!(
            FeedbackEffect::from_command(Command::Failure),
            Some(FeedbackEffect::Failure)
        );
        assert_eq!(FeedbackEffect::from_command(Command::TempChange), None);
        assert_eq!(FeedbackEffect::from_command(Command::ModeChange), None);
    }

    #[test]
    fn test_backgrounds() {
        assert_eq!(
            FeedbackEffect::Success.background(),
            Some(Background::Neutral)
        );
        assert_eq!(FeedbackEffect::Failure.background(), Some(Background::Alert));
        assert_eq!(FeedbackEffect::Overflow.background(), None);
    }

    #[test]
    fn test_patterns() {
        assert_eq!(FeedbackEffect::Success.vibe_pattern().total_ms(), 50);
        assert_eq!(FeedbackEffect::Failure.vibe_pattern().durations_ms, &[40, 40, 40]);
        assert_eq!(FeedbackEffect::Overflow.vibe_pattern().total_ms(), 180);
    }

    #[test]
    fn test_pending_labels() {
        assert_eq!(PendingLabel::for_delta(1), Some(PendingLabel::Raising));
        assert_eq!(PendingLabel::for_delta(-1), Some(PendingLabel::Lowering));
        assert_eq!(PendingLabel::for_delta(0), None);
        assert_eq!(PendingLabel::Raising.text(), "Raising ...");
    }
}
