//! Core domain + application logic for the channel relay bot.
//!
//! This crate is intentionally framework-agnostic. Telegram (and the liveness
//! endpoint) live behind ports (traits) implemented in adapter crates.

pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod ledger;
pub mod logging;
pub mod messaging;
pub mod registry;
pub mod state;

pub use errors::{Error, Result};
