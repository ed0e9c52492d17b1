//! Message key identifiers shared by the watch and the phone

/// Named keys used in watch ↔ phone dictionaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageKey {
    /// Command tag (see `Command`)
    Command,
    /// Registry slot the message refers to
    ThermostatIndex,
    /// Display label
    ThermostatName,
    /// Measured temperature label
    CurrentTemperature,
    /// Setpoint label
    TargetTemperature,
    /// Operating mode label
    ThermostatMode,
    /// Signed setpoint step requested by the watch
    TemperatureChange,
    /// Unified temperature label (single-temperature variant)
    Temperature,
}

/// First id assigned to application message keys
pub const MESSAGE_KEY_BASE: u32 = 10000;

const KEY_COMMAND: u32 = MESSAGE_KEY_BASE;
const KEY_THERMOSTAT_INDEX: u32 = MESSAGE_KEY_BASE + 1;
const KEY_THERMOSTAT_NAME: u32 = MESSAGE_KEY_BASE + 2;
const KEY_CURRENT_TEMPERATURE: u32 = MESSAGE_KEY_BASE + 3;
const KEY_TARGET_TEMPERATURE: u32 = MESSAGE_KEY_BASE + 4;
const KEY_THERMOSTAT_MODE: u32 = MESSAGE_KEY_BASE + 5;
const KEY_TEMPERATURE_CHANGE: u32 = MESSAGE_KEY_BASE + 6;
const KEY_TEMPERATURE: u32 = MESSAGE_KEY_BASE + 7;

impl MessageKey {
    /// Every key, in id order
    pub const ALL: [MessageKey; 8] = [
        MessageKey::Command,
        MessageKey::ThermostatIndex,
        MessageKey::ThermostatName,
        MessageKey::CurrentTemperature,
        MessageKey::TargetTemperature,
        MessageKey::ThermostatMode,
        MessageKey::TemperatureChange,
        MessageKey::Temperature,
    ];

    /// Wire id of this key
    pub const fn id(self) -> u32 {
        match self {
            MessageKey::Command => KEY_COMMAND,
            MessageKey::ThermostatIndex => KEY_THERMOSTAT_INDEX,
            MessageKey::ThermostatName => KEY_THERMOSTAT_NAME,
            MessageKey::CurrentTemperature => KEY_CURRENT_TEMPERATURE,
            MessageKey::TargetTemperature => KEY_TARGET_TEMPERATURE,
            MessageKey::ThermostatMode => KEY_THERMOSTAT_MODE,
            MessageKey::TemperatureChange => KEY_TEMPERATURE_CHANGE,
            MessageKey::Temperature => KEY_TEMPERATURE,
        }
    }
}
