// file: src/platform.rs
// version: 1.0.0
// guid: 8fff8dfc-1bb6-484e-ad14-f028b9d24610

//! Host operating system family detection

use crate::error::{Result, ZoneFactsError};
use std::fmt;

/// Operating system family of the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    SunOs,
    Linux,
    MacOs,
    Windows,
    Other(String),
}

impl OsFamily {
    /// Family of the running host
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to its family
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "solaris" | "illumos" => OsFamily::SunOs,
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::MacOs,
            "windows" => OsFamily::Windows,
            other => OsFamily::Other(other.to_string()),
        }
    }

    /// Whether zones exist on this family
    pub fn supports_zones(&self) -> bool {
        matches!(self, OsFamily::SunOs)
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::SunOs => f.write_str("SunOS"),
            OsFamily::Linux => f.write_str("Linux"),
            OsFamily::MacOs => f.write_str("Darwin"),
            OsFamily::Windows => f.write_str("Windows"),
            OsFamily::Other(name) => f.write_str(name),
        }
    }
}

/// Refuse to go any further on hosts without zones
pub fn ensure_supported(family: &OsFamily) -> Result<()> {
    if family.supports_zones() {
        Ok(())
    } else {
        Err(ZoneFactsError::UnsupportedPlatform {
            found: family.to_string(),
        })
    }
}
