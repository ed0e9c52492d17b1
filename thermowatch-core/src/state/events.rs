//! User intents derived from button events

use thermowatch_protocol::ButtonEvent;

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Intent {
    /// Step the active thermostat's setpoint up
    RaiseTemperature,
    /// Step the active thermostat's setpoint down
    LowerTemperature,
    /// Ask the phone to cycle the active thermostat's mode
    ToggleMode,
    /// Show the next thermostat
    NextThermostat,
}

impl Intent {
    /// Map a physical button event to its intent
    pub fn from_button(event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::Up => Intent::RaiseTemperature,
            ButtonEvent::Down => Intent::LowerTemperature,
            ButtonEvent::Select => Intent::ToggleMode,
            ButtonEvent::LongSelect => Intent::NextThermostat,
        }
    }

    /// Setpoint step for temperature intents, 0 otherwise
    pub fn temperature_delta(&self) -> i8 {
        match self {
            Intent::RaiseTemperature => 1,
            Intent::LowerTemperature => -1,
            _ => 0,
        }
    }
}
