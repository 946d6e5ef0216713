// file: src/cli/mod.rs
// version: 1.0.0
// guid: 6ff1b853-3cd6-4f5d-a984-6d82ae483aec

//! Command line interface for zoneadm-facts

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::*;
