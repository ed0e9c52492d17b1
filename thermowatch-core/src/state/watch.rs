//! Owned watch state
//!
//! The registry, the selection cursor, and the active capabilities live in
//! one value that is passed by reference to the sync handler, the command
//! encoder, and the presentation adapter.

use crate::config::SyncCapabilities;
use crate::registry::{Registry, ThermostatRecord};
use crate::selection::SelectionCursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchState {
    registry: Registry,
    selection: SelectionCursor,
    capabilities: SyncCapabilities,
}

impl Default for WatchState {
    fn default() -> Self {
        Self::new(SyncCapabilities::default())
    }
}

impl WatchState {
    /// Fresh state: placeholder records, first thermostat selected
    pub fn new(capabilities: SyncCapabilities) -> Self {
        Self {
            registry: Registry::new(),
            selection: SelectionCursor::new(),
            capabilities,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn selection(&self) -> SelectionCursor {
        self.selection
    }

    pub fn capabilities(&self) -> SyncCapabilities {
        self.capabilities
    }

    /// Record under the selection cursor
    pub fn active_record(&self) -> &ThermostatRecord {
        self.registry.selected(&self.selection)
    }

    /// Move the cursor to the next thermostat
    pub fn advance_selection(&mut self) -> usize {
        self.selection.advance()
    }

    /// Mutable registry access, reserved for the inbound sync handler
    pub(crate) fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Field, MAX_THERMOSTATS};

    #[test]
    fn test_active_record_follows_selection() {
        let mut state = WatchState::default();
        state.registry_mut().update_field(1, Field::Name, "Bedroom");

        assert_eq!(state.active_record().name, "Loading ...");
        state.advance_selection();
        assert_eq!(state.active_record().name, "Bedroom");
    }

    #[test]
    fn test_advance_wraps_through_all_slots() {
        let mut state = WatchState::default();
        for _ in 0..MAX_THERMOSTATS {
            state.advance_selection();
        }
        assert_eq!(state.selection().index(), 0);
    }
}
