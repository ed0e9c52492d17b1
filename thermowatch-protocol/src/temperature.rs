//! Temperature label formatting
//!
//! The phone reports temperatures to the watch as short display labels
//! such as `"72°"`. Thermostat backends speak Celsius; labels are whole
//! degrees Fahrenheit.

use core::fmt::Write;
use heapless::String;

/// Longest label produced by `fahrenheit_label` ("-5866°")
pub const MAX_LABEL_LEN: usize = 8;

/// Degree sign appended to every label
pub const DEGREE_SIGN: char = '°';

/// Convert tenths of a degree Celsius to whole degrees Fahrenheit
///
/// Rounds half away from zero.
pub fn celsius_x10_to_fahrenheit(celsius_x10: i16) -> i16 {
    // °F × 50 = °C×10 × 9 + 1600
    let f_x50 = celsius_x10 as i32 * 9 + 1600;
    let rounded = if f_x50 >= 0 {
        (f_x50 + 25) / 50
    } else {
        (f_x50 - 25) / 50
    };
    rounded as i16
}

/// Format tenths of a degree Celsius as a Fahrenheit label, e.g. `222` → `"72°"`
pub fn fahrenheit_label(celsius_x10: i16) -> String<MAX_LABEL_LEN> {
    let mut label = String::new();
    // i16 input yields at most 4 digits, a sign and '°'
    let _ = write!(label, "{}{}", celsius_x10_to_fahrenheit(celsius_x10), DEGREE_SIGN);
    label
}
