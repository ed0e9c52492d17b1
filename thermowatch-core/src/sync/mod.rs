//! Watch ↔ phone synchronisation
//!
//! - `inbound`: apply phone updates to the registry
//! - `outbound`: encode user intents for the phone

pub mod error;
pub mod inbound;
pub mod outbound;

pub use error::SyncError;
pub use inbound::{apply, SyncReport};
pub use outbound::CommandEncoder;
