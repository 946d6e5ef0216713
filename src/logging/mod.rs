// file: src/logging/mod.rs
// version: 1.0.0
// guid: 5ae523fd-81f3-4a18-a595-9c2ef61923c5

//! Logging system for zone fact gathering

pub mod logger;

pub use logger::{init_json_logger, init_logger};
