//! Thermostat registry
//!
//! Fixed-size table of thermostat records mirrored from the phone. Slots
//! are created with placeholder values at startup and only ever updated
//! field by field.

pub mod record;
pub mod text;

pub use record::{Field, ThermostatRecord};
pub use text::BoundedText;

use crate::selection::SelectionCursor;

/// Number of thermostat slots
pub const MAX_THERMOSTATS: usize = 2;

/// Result of a single field update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateOutcome {
    /// Value stored as given
    Stored,
    /// Value stored after truncation to the field capacity
    Truncated,
    /// Index outside the registry; nothing changed
    OutOfRange,
}

/// Fixed-capacity thermostat table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    records: [ThermostatRecord; MAX_THERMOSTATS],
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a registry filled with placeholder records
    pub fn new() -> Self {
        Self {
            records: core::array::from_fn(|_| ThermostatRecord::default()),
        }
    }

    /// Number of slots (always `MAX_THERMOSTATS`)
    pub const fn len(&self) -> usize {
        MAX_THERMOSTATS
    }

    pub const fn is_empty(&self) -> bool {
        MAX_THERMOSTATS == 0
    }

    /// Check whether `index` addresses a slot
    pub fn contains(&self, index: usize) -> bool {
        index < MAX_THERMOSTATS
    }

    /// Read-only view of a slot
    pub fn get(&self, index: usize) -> Option<&ThermostatRecord> {
        self.records.get(index)
    }

    /// Slot under the selection cursor
    ///
    /// The cursor is always in range, so this never fails.
    pub fn selected(&self, cursor: &SelectionCursor) -> &ThermostatRecord {
        &self.records[cursor.index()]
    }

    /// Apply a single field update
    ///
    /// Out-of-range indexes are dropped without touching any slot.
    pub fn update_field(&mut self, index: usize, field: Field, value: &str) -> UpdateOutcome {
        match self.records.get_mut(index) {
            Some(record) => {
                if record.set_field(field, value) {
                    UpdateOutcome::Truncated
                } else {
                    UpdateOutcome::Stored
                }
            }
            None => UpdateOutcome::OutOfRange,
        }
    }

    /// Iterate over all slots in index order
    pub fn iter(&self) -> impl Iterator<Item = &ThermostatRecord> {
        self.records.iter()
    }
}
