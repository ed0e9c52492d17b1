//! Message types exchanged with the phone
//!
//! - Phone → Watch: sparse thermostat state updates, optionally tagged
//!   with an acknowledgement (`Success` / `Failure`)
//! - Watch → Phone: user intents (temperature step, mode toggle)

use heapless::Vec;

use crate::dict::{DictError, DictWriter, Dictionary, TupleValue};
use crate::keys::MessageKey;

/// Command tags carried under `MessageKey::Command`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Watch → Phone: step the setpoint
    TempChange,
    /// Watch → Phone: advance to the next supported mode
    ModeChange,
    /// Phone → Watch: the last change was applied
    Success,
    /// Phone → Watch: the last change failed
    Failure,
}

// Wire format values
const COMMAND_TEMP_CHANGE: u8 = 0;
const COMMAND_MODE_CHANGE: u8 = 1;
const COMMAND_SUCCESS: u8 = 2;
const COMMAND_FAILURE: u8 = 3;

impl Command {
    /// Parse a command from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            COMMAND_TEMP_CHANGE => Some(Command::TempChange),
            COMMAND_MODE_CHANGE => Some(Command::ModeChange),
            COMMAND_SUCCESS => Some(Command::Success),
            COMMAND_FAILURE => Some(Command::Failure),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Command::TempChange => COMMAND_TEMP_CHANGE,
            Command::ModeChange => COMMAND_MODE_CHANGE,
            Command::Success => COMMAND_SUCCESS,
            Command::Failure => COMMAND_FAILURE,
        }
    }

    /// Returns true for the phone's acknowledgement tags
    pub fn is_ack(&self) -> bool {
        matches!(self, Command::Success | Command::Failure)
    }
}

/// Which keys an inbound decoder recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Schema {
    /// Read `currentTemperature` + `targetTemperature`; otherwise read the
    /// unified `temperature` key into the current temperature slot
    pub separate_current_target: bool,
    /// Read the `command` tag
    pub command_tag: bool,
}

impl Schema {
    /// Separate current/target temperatures with acknowledgement tags
    pub const DUAL_TEMPERATURE: Schema = Schema {
        separate_current_target: true,
        command_tag: true,
    };

    /// Single unified temperature, no acknowledgement tags
    pub const SINGLE_TEMPERATURE: Schema = Schema {
        separate_current_target: false,
        command_tag: false,
    };
}

impl Default for Schema {
    fn default() -> Self {
        Schema::DUAL_TEMPERATURE
    }
}

/// Sparse state update received from the phone
///
/// Every field is optional; `None` means the key was absent (or carried a
/// value of the wrong type) and the corresponding state must stay as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InboundMessage<'a> {
    pub command: Option<Command>,
    pub thermostat_index: Option<u32>,
    pub thermostat_name: Option<&'a str>,
    /// Current temperature, or the unified temperature for single schemas
    pub current_temperature: Option<&'a str>,
    pub target_temperature: Option<&'a str>,
    pub thermostat_mode: Option<&'a str>,
}

impl<'a> InboundMessage<'a> {
    /// Decode a message from a parsed dictionary using `schema`
    ///
    /// Keys outside the schema are ignored.
    pub fn decode(dict: &Dictionary<'a>, schema: Schema) -> Self {
        let text = |key: MessageKey| dict.find(key.id()).and_then(TupleValue::as_str);

        let command = if schema.command_tag {
            dict.find(MessageKey::Command.id())
                .and_then(TupleValue::as_unsigned)
                .and_then(|v| u8::try_from(v).ok())
                .and_then(Command::from_byte)
        } else {
            None
        };

        let (current_temperature, target_temperature) = if schema.separate_current_target {
            (
                text(MessageKey::CurrentTemperature),
                text(MessageKey::TargetTemperature),
            )
        } else {
            (text(MessageKey::Temperature), None)
        };

        Self {
            command,
            thermostat_index: dict
                .find(MessageKey::ThermostatIndex.id())
                .and_then(TupleValue::as_unsigned),
            thermostat_name: text(MessageKey::ThermostatName),
            current_temperature,
            target_temperature,
            thermostat_mode: text(MessageKey::ThermostatMode),
        }
    }

    /// Parse and decode raw inbox bytes in one step
    pub fn from_bytes(bytes: &'a [u8], schema: Schema) -> Result<Self, DictError> {
        let dict = Dictionary::parse(bytes)?;
        Ok(Self::decode(&dict, schema))
    }

    /// Encode this message (for testing or phone-side simulation)
    pub fn encode<const N: usize>(&self, schema: Schema) -> Result<Vec<u8, N>, DictError> {
        let mut writer = DictWriter::<N>::new();
        if let (true, Some(command)) = (schema.command_tag, self.command) {
            writer.write_int(MessageKey::Command.id(), command.to_byte() as i32)?;
        }
        if let Some(index) = self.thermostat_index {
            writer.write_uint(MessageKey::ThermostatIndex.id(), index)?;
        }
        if let Some(name) = self.thermostat_name {
            writer.write_cstring(MessageKey::ThermostatName.id(), name)?;
        }
        if schema.separate_current_target {
            if let Some(current) = self.current_temperature {
                writer.write_cstring(MessageKey::CurrentTemperature.id(), current)?;
            }
            if let Some(target) = self.target_temperature {
                writer.write_cstring(MessageKey::TargetTemperature.id(), target)?;
            }
        } else if let Some(temperature) = self.current_temperature {
            writer.write_cstring(MessageKey::Temperature.id(), temperature)?;
        }
        if let Some(mode) = self.thermostat_mode {
            writer.write_cstring(MessageKey::ThermostatMode.id(), mode)?;
        }
        writer.finish()
    }
}

/// Intent sent from the watch to the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutboundMessage {
    /// `{command: TempChange, thermostatIndex, temperatureChange}`
    TemperatureChange { thermostat_index: u8, delta: i8 },
    /// `{command: ModeChange, thermostatIndex}`
    ModeChange { thermostat_index: u8 },
}

impl OutboundMessage {
    /// Command tag written for this message
    pub fn command(&self) -> Command {
        match self {
            OutboundMessage::TemperatureChange { .. } => Command::TempChange,
            OutboundMessage::ModeChange { .. } => Command::ModeChange,
        }
    }

    /// Registry slot this message targets
    pub fn thermostat_index(&self) -> u8 {
        match *self {
            OutboundMessage::TemperatureChange {
                thermostat_index, ..
            }
            | OutboundMessage::ModeChange { thermostat_index } => thermostat_index,
        }
    }

    /// Encode into a dictionary of at most `N` bytes
    pub fn encode<const N: usize>(&self) -> Result<Vec<u8, N>, DictError> {
        let mut writer = DictWriter::<N>::new();
        writer.write_int(MessageKey::Command.id(), self.command().to_byte() as i32)?;
        writer.write_int(
            MessageKey::ThermostatIndex.id(),
            self.thermostat_index() as i32,
        )?;
        if let OutboundMessage::TemperatureChange { delta, .. } = *self {
            writer.write_int(MessageKey::TemperatureChange.id(), delta as i32)?;
        }
        writer.finish()
    }

    /// Decode a watch-originated dictionary (phone side)
    ///
    /// Returns `None` when the command tag or index is missing or the
    /// command is not an outbound one.
    pub fn decode(dict: &Dictionary<'_>) -> Option<Self> {
        let command = dict
            .find(MessageKey::Command.id())
            .and_then(TupleValue::as_unsigned)
            .and_then(|v| u8::try_from(v).ok())
            .and_then(Command::from_byte)?;
        let thermostat_index = dict
            .find(MessageKey::ThermostatIndex.id())
            .and_then(TupleValue::as_unsigned)
            .and_then(|v| u8::try_from(v).ok())?;

        match command {
            Command::TempChange => {
                let delta = dict
                    .find(MessageKey::TemperatureChange.id())
                    .and_then(TupleValue::as_signed)
                    .and_then(|v| i8::try_from(v).ok())?;
                Some(OutboundMessage::TemperatureChange {
                    thermostat_index,
                    delta,
                })
            }
            Command::ModeChange => Some(OutboundMessage::ModeChange { thermostat_index }),
            Command::Success | Command::Failure => None,
        }
    }
}
