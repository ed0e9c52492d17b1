//! Board-agnostic core logic for the thermostat watch app
//!
//! This crate contains all application logic that does not depend on the
//! host watch platform:
//!
//! - Thermostat registry and selection cursor
//! - Inbound sync handler and outbound command encoder
//! - Feedback effects and the presentation seam
//! - Controller tying button events and inbox bytes to the state
//! - Configuration types (TOML and postcard behind `serde`)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod feedback;
pub mod registry;
pub mod selection;
pub mod state;
pub mod sync;
pub mod traits;

pub use controller::{Controller, Reaction};
