//! Presentation adapter for the thermowatch core
//!
//! This crate provides:
//! - `WatchBackend` and `Haptics` traits for the host window and vibration motor
//! - `Presenter`, the core `Presentation` implementation over those traits
//! - `Screen` and `VibeLog`, in-memory backends for host runs and tests
//! - `WatchSession`, which wires host callbacks to a `Controller`
//!
//! # Architecture
//!
//! The host registers click and inbox callbacks and forwards them to a
//! `WatchSession`. The session asks the controller what changed and
//! replays the answer on the presenter, which drives the host layers.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod presenter;
pub mod screen;
pub mod session;

// Re-export key types
pub use backend::{Haptics, TextLayer, WatchBackend};
pub use presenter::Presenter;
pub use screen::{Screen, VibeLog};
pub use session::WatchSession;
