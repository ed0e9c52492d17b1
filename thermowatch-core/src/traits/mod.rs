//! Host abstraction traits
//!
//! These traits define the interface between the sync core and the
//! host-provided messaging and UI services.

pub mod presentation;
pub mod transport;

pub use presentation::{NeverQuiet, Presentation, QuietTime};
pub use transport::{Outbox, TransportError};
