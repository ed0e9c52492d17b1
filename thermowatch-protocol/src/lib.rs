//! Watch ↔ phone message protocol for the thermowatch thermostat remote
//!
//! This crate defines the key/value messages exchanged between the watch
//! (UI terminal) and the companion phone application (which talks to the
//! actual thermostats). The watch keeps no authoritative state of its own:
//! it mirrors what the phone reports and sends user intents back.
//!
//! # Protocol Overview
//!
//! Every message is a packed dictionary of typed tuples:
//! ```text
//! ┌───────┬─────────────────────────────────────────────┐
//! │ COUNT │ TUPLE × COUNT                               │
//! │ 1B    │ KEY 4B │ TYPE 1B │ LENGTH 2B │ DATA 0–n B   │
//! └───────┴─────────────────────────────────────────────┘
//! ```
//!
//! Inbound and outbound buffers are 64 bytes each.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod dict;
pub mod events;
pub mod keys;
pub mod messages;
pub mod temperature;

pub use dict::{DictError, DictWriter, Dictionary, Tuple, TupleValue, INBOX_SIZE, OUTBOX_SIZE};
pub use events::ButtonEvent;
pub use keys::MessageKey;
pub use messages::{Command, InboundMessage, OutboundMessage, Schema};
pub use temperature::fahrenheit_label;
