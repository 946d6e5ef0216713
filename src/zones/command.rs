// file: src/zones/command.rs
// version: 1.0.0
// guid: dd48d9ea-5398-4a34-aad3-32f12abaf1ec

//! Supported enumeration commands and their resolution on PATH

use super::{parser, ZoneRecord};
use crate::error::{Result, ZoneFactsError};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// An enumeration command this tool knows how to run and parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneCommand {
    Zoneadm,
}

impl ZoneCommand {
    /// Every supported command
    pub const ALL: &'static [ZoneCommand] = &[ZoneCommand::Zoneadm];

    /// Executable name looked up on PATH
    pub fn name(&self) -> &'static str {
        match self {
            ZoneCommand::Zoneadm => "zoneadm",
        }
    }

    /// Fixed argument list for a listing run
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            ZoneCommand::Zoneadm => &["list", "-i", "-c", "-v"],
        }
    }

    /// Parse the captured stdout of a successful run
    pub fn parse(&self, raw: &str) -> Result<Vec<ZoneRecord>> {
        match self {
            ZoneCommand::Zoneadm => parser::parse_zone_list(raw),
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

/// A command found on this host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub kind: ZoneCommand,
    pub path: PathBuf,
}

/// Probe the search path for the first available command, trying names in
/// lexicographic order.
///
/// `search_path` overrides `$PATH` when given.
pub fn resolve_first<'a, I>(names: I, search_path: Option<&OsString>) -> Result<(String, PathBuf)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut candidates: Vec<&str> = names.into_iter().collect();
    candidates.sort_unstable();
    candidates.dedup();

    let cwd = match search_path {
        Some(_) => Some(std::env::current_dir()?),
        None => None,
    };

    for name in &candidates {
        let found = match (search_path, &cwd) {
            (Some(paths), Some(cwd)) => which::which_in(name, Some(paths), cwd),
            _ => which::which(name),
        };
        match found {
            Ok(path) => {
                debug!("Resolved {} to {}", name, path.display());
                return Ok((name.to_string(), path));
            }
            Err(e) => debug!("{} not found: {}", name, e),
        }
    }

    Err(ZoneFactsError::CommandNotFound {
        candidates: candidates.iter().map(|c| c.to_string()).collect(),
    })
}

/// Picks the enumeration command to run
#[derive(Debug, Clone, Default)]
pub struct CommandResolver {
    search_path: Option<OsString>,
}

impl CommandResolver {
    /// Resolve against the process `$PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against an explicit search path instead of `$PATH`
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Find the first available command among `candidates`
    pub fn resolve(&self, candidates: &[ZoneCommand]) -> Result<ResolvedCommand> {
        let (name, path) = resolve_first(
            candidates.iter().map(ZoneCommand::name),
            self.search_path.as_ref(),
        )?;
        let kind = ZoneCommand::from_name(&name).ok_or_else(|| ZoneFactsError::CommandNotFound {
            candidates: vec![name.clone()],
        })?;
        Ok(ResolvedCommand { kind, path })
    }
}
