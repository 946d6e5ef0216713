// file: src/config/mod.rs
// version: 1.0.0
// guid: 4904e2b0-b83a-48e7-ba68-09c82b6e73eb

//! Configuration for zone fact gathering
//!
//! Settings come from an optional YAML file; command line flags override them.

pub mod loader;

pub use loader::ConfigLoader;

use crate::executor::DEFAULT_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneFactsConfig {
    /// Seconds allowed for the enumeration command
    pub timeout_seconds: u64,
    /// Search path used instead of `$PATH` when looking up commands
    pub search_path: Option<String>,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for ZoneFactsConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            search_path: None,
            pretty: false,
        }
    }
}

impl ZoneFactsConfig {
    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.timeout_seconds == 0 {
            return Err(crate::error::ZoneFactsError::validation(
                "timeout_seconds must be greater than zero",
            ));
        }

        if let Some(search_path) = &self.search_path {
            if search_path.trim().is_empty() {
                return Err(crate::error::ZoneFactsError::validation(
                    "search_path cannot be empty",
                ));
            }
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
