// file: src/zones/mod.rs
// version: 1.0.0
// guid: cefe909e-3fac-4154-966a-2d7758e2d2cd

//! Zone records reported by the enumeration command
//!
//! `parser` turns captured `zoneadm list -i -c -v` text into records and
//! `command` picks the enumeration command available on this host.

pub mod command;
pub mod parser;

pub use command::{resolve_first, CommandResolver, ResolvedCommand, ZoneCommand};
pub use parser::parse_zone_list;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One configured local zone as reported by `zoneadm`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ZoneRecord {
    id: String,
    name: String,
    status: String,
    path: String,
    brand: String,
    ip: String,
}

impl ZoneRecord {
    /// Build a record from its six columns in table order
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: impl Into<String>,
        path: impl Into<String>,
        brand: impl Into<String>,
        ip: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: status.into(),
            path: path.into(),
            brand: brand.into(),
            ip: ip.into(),
        }
    }

    /// Zone ID; empty or `-` for zones that are not running
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw STATUS column, kept verbatim
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Zone root path
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// IP type descriptor, `shared` for shared-IP zones
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Classified view of the STATUS column
    pub fn zone_status(&self) -> ZoneStatus {
        self.status.parse().unwrap_or_else(|never| match never {})
    }
}

/// Zone states `zoneadm` is known to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneStatus {
    Configured,
    Incomplete,
    Installed,
    Ready,
    Running,
    ShuttingDown,
    Down,
    Mounted,
    Unavailable,
    Other(String),
}

impl ZoneStatus {
    /// Get the status as it appears in `zoneadm` output
    pub fn as_str(&self) -> &str {
        match self {
            ZoneStatus::Configured => "configured",
            ZoneStatus::Incomplete => "incomplete",
            ZoneStatus::Installed => "installed",
            ZoneStatus::Ready => "ready",
            ZoneStatus::Running => "running",
            ZoneStatus::ShuttingDown => "shutting_down",
            ZoneStatus::Down => "down",
            ZoneStatus::Mounted => "mounted",
            ZoneStatus::Unavailable => "unavailable",
            ZoneStatus::Other(raw) => raw,
        }
    }
}

impl std::str::FromStr for ZoneStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "configured" => ZoneStatus::Configured,
            "incomplete" => ZoneStatus::Incomplete,
            "installed" => ZoneStatus::Installed,
            "ready" => ZoneStatus::Ready,
            "running" => ZoneStatus::Running,
            "shutting_down" => ZoneStatus::ShuttingDown,
            "down" => ZoneStatus::Down,
            "mounted" => ZoneStatus::Mounted,
            "unavailable" => ZoneStatus::Unavailable,
            other => ZoneStatus::Other(other.to_string()),
        })
    }
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Find the zone with the given ID
pub fn find_by_id<'a>(zones: &'a [ZoneRecord], id: &str) -> Option<&'a ZoneRecord> {
    zones.iter().find(|zone| zone.id == id)
}

/// Zones whose STATUS column matches `status` exactly
pub fn with_status<'a>(zones: &'a [ZoneRecord], status: &str) -> Vec<&'a ZoneRecord> {
    zones.iter().filter(|zone| zone.status == status).collect()
}

/// Zone names in report order
pub fn names(zones: &[ZoneRecord]) -> Vec<&str> {
    zones.iter().map(ZoneRecord::name).collect()
}
