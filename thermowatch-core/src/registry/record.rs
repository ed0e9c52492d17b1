//! Thermostat record mirrored from the phone

use super::text::BoundedText;

/// Name capacity in bytes
pub const NAME_CAPACITY: usize = 49;

/// Temperature label capacity in bytes (e.g. "100°")
pub const TEMPERATURE_CAPACITY: usize = 5;

/// Mode label capacity in bytes
pub const MODE_CAPACITY: usize = 9;

/// Placeholder name shown until the phone reports in
pub const DEFAULT_NAME: &str = "Loading ...";

/// Placeholder temperature label
pub const DEFAULT_TEMPERATURE: &str = "0°";

/// Placeholder mode label
pub const DEFAULT_MODE: &str = "OFF";

/// Updatable record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Name,
    /// Current temperature; holds the unified temperature in
    /// single-temperature setups
    CurrentTemperature,
    TargetTemperature,
    Mode,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::CurrentTemperature,
        Field::TargetTemperature,
        Field::Mode,
    ];

    /// Byte capacity of the field
    pub const fn capacity(self) -> usize {
        match self {
            Field::Name => NAME_CAPACITY,
            Field::CurrentTemperature | Field::TargetTemperature => TEMPERATURE_CAPACITY,
            Field::Mode => MODE_CAPACITY,
        }
    }
}

/// Display state of one thermostat
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThermostatRecord {
    pub name: BoundedText<NAME_CAPACITY>,
    pub current_temperature: BoundedText<TEMPERATURE_CAPACITY>,
    pub target_temperature: BoundedText<TEMPERATURE_CAPACITY>,
    pub mode: BoundedText<MODE_CAPACITY>,
}

impl Default for ThermostatRecord {
    fn default() -> Self {
        Self {
            name: BoundedText::truncating(DEFAULT_NAME),
            current_temperature: BoundedText::truncating(DEFAULT_TEMPERATURE),
            target_temperature: BoundedText::truncating(DEFAULT_TEMPERATURE),
            mode: BoundedText::truncating(DEFAULT_MODE),
        }
    }
}

impl ThermostatRecord {
    /// Unified temperature (alias for the current temperature)
    pub fn temperature(&self) -> &str {
        self.current_temperature.as_str()
    }

    /// Read a field by tag
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => self.name.as_str(),
            Field::CurrentTemperature => self.current_temperature.as_str(),
            Field::TargetTemperature => self.target_temperature.as_str(),
            Field::Mode => self.mode.as_str(),
        }
    }

    /// Overwrite a field by tag
    ///
    /// Returns `true` when `value` was truncated to the field capacity.
    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        match field {
            Field::Name => self.name.set(value),
            Field::CurrentTemperature => self.current_temperature.set(value),
            Field::TargetTemperature => self.target_temperature.set(value),
            Field::Mode => self.mode.set(value),
        }
    }
}
