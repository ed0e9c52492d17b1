//! Button events delivered by the watch input layer

/// Physical button events consumed by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Up button single click
    Up,
    /// Down button single click
    Down,
    /// Select button single click
    Select,
    /// Select button held for at least 500 ms
    LongSelect,
}

// Wire format values
const BUTTON_UP: u8 = 0x01;
const BUTTON_SELECT: u8 = 0x02;
const BUTTON_DOWN: u8 = 0x03;
const BUTTON_SELECT_LONG: u8 = 0x12;

impl ButtonEvent {
    /// Parse an event from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            BUTTON_UP => Some(ButtonEvent::Up),
            BUTTON_SELECT => Some(ButtonEvent::Select),
            BUTTON_DOWN => Some(ButtonEvent::Down),
            BUTTON_SELECT_LONG => Some(ButtonEvent::LongSelect),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            ButtonEvent::Up => BUTTON_UP,
            ButtonEvent::Select => BUTTON_SELECT,
            ButtonEvent::Down => BUTTON_DOWN,
            ButtonEvent::LongSelect => BUTTON_SELECT_LONG,
        }
    }

    /// Setpoint step requested by this button (-1, 0, or +1)
    pub fn temperature_delta(&self) -> i8 {
        match self {
            ButtonEvent::Up => 1,
            ButtonEvent::Down => -1,
            _ => 0,
        }
    }

    /// Returns true for the select button, short or long
    pub fn is_select(&self) -> bool {
        matches!(self, ButtonEvent::Select | ButtonEvent::LongSelect)
    }
}
