//! Watch state and user intents

pub mod events;
pub mod watch;

pub use events::Intent;
pub use watch::WatchState;
