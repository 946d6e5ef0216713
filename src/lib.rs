// file: src/lib.rs
// version: 1.0.0
// guid: 7b91f9b5-65a7-48c7-9ffb-06543a5f0f7a

//! # zoneadm-facts
//!
//! Reports the configured local zones of a Solaris/illumos global zone.
//! `zoneadm list -i -c -v` is resolved on PATH, run once, and its fixed
//! six-column table is parsed into [`zones::ZoneRecord`] values that are
//! emitted as a JSON facts payload for automation tooling.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod facts;
pub mod logging;
pub mod platform;
pub mod zones;

pub use error::{Result, ZoneFactsError};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
