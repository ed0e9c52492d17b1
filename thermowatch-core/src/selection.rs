//! Selection cursor
//!
//! Tracks which registry slot is shown and receives outbound commands.

use crate::registry::MAX_THERMOSTATS;

/// Index of the active thermostat, always in `[0, MAX_THERMOSTATS)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelectionCursor {
    index: usize,
}

impl SelectionCursor {
    /// Cursor on the first slot
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Currently selected slot
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Move to the next slot, wrapping after the last one
    ///
    /// Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % MAX_THERMOSTATS;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(SelectionCursor::new().index(), 0);
        assert_eq!(SelectionCursor::default(), SelectionCursor::new());
    }

    #[test]
    fn test_advance_wraps() {
        let mut cursor = SelectionCursor::new();
        assert_eq!(cursor.advance(), 1);
        assert_eq!(cursor.advance(), 0);
    }

    proptest! {
        #[test]
        fn full_cycle_returns_to_start(offset in 0..MAX_THERMOSTATS, laps in 1usize..4) {
            let mut cursor = SelectionCursor::new();
            for _ in 0..offset {
                cursor.advance();
            }
            let start = cursor.index();

            for _ in 0..laps * MAX_THERMOSTATS {
                prop_assert!(cursor.advance() < MAX_THERMOSTATS);
            }
            prop_assert_eq!(cursor.index(), start);
        }
    }
}
