// file: src/facts.rs
// version: 1.0.0
// guid: df5822ee-e3cb-422a-9fe9-3498a864baa4

//! Zone fact gathering and the JSON payloads it reports

use crate::error::{Result, ZoneFactsError};
use crate::executor::CommandRunner;
use crate::platform::{self, OsFamily};
use crate::zones::{CommandResolver, ZoneCommand, ZoneRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Options for one gathering run
#[derive(Debug, Clone, Copy, Default)]
pub struct FactsRequest {
    /// Check mode; gathering is read-only so this changes nothing
    pub check_mode: bool,
}

/// Successful result payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneFacts {
    pub changed: bool,
    pub ansible_facts: AnsibleFacts,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnsibleFacts {
    pub zone_list: Vec<ZoneRecord>,
}

impl ZoneFacts {
    pub fn new(zone_list: Vec<ZoneRecord>) -> Self {
        Self {
            changed: false,
            ansible_facts: AnsibleFacts { zone_list },
        }
    }

    pub fn zones(&self) -> &[ZoneRecord] {
        &self.ansible_facts.zone_list
    }
}

/// Failure payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub failed: bool,
    pub changed: bool,
    pub msg: String,
}

impl From<&ZoneFactsError> for FailureReport {
    fn from(err: &ZoneFactsError) -> Self {
        Self {
            failed: true,
            changed: false,
            msg: err.to_string(),
        }
    }
}

/// Gather the configured local zones of this host.
///
/// Gate on the OS family, resolve the enumeration command, run it and parse
/// its stdout. Any failure aborts the run without a partial zone list.
pub async fn gather_zone_facts<R>(
    platform: &OsFamily,
    resolver: &CommandResolver,
    runner: &R,
    request: FactsRequest,
) -> Result<ZoneFacts>
where
    R: CommandRunner + ?Sized,
{
    platform::ensure_supported(platform)?;

    if request.check_mode {
        debug!("Check mode requested; zone listing is read-only");
    }

    let resolved = resolver.resolve(ZoneCommand::ALL)?;
    let command = resolved.kind;
    info!(
        "Listing zones with {} {}",
        resolved.path.display(),
        command.args().join(" ")
    );

    let output = runner.run(&resolved.path, command.args()).await?;
    if !output.success() {
        return Err(ZoneFactsError::CommandFailed {
            command: resolved.path.display().to_string(),
            code: output.status,
            detail: output.diagnostic(),
        });
    }

    let zones = command.parse(&output.stdout)?;
    info!("Found {} local zones", zones.len());

    Ok(ZoneFacts::new(zones))
}

/// Render a payload as JSON
pub fn to_json<T: Serialize>(payload: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::CommandOutput;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::TempDir;

    const LISTING: &str = "  ID NAME             STATUS     PATH                           BRAND    IP\n   0 global           running    /                              native   shared\n   1 sol11lab         running    /zones/sol11lab                native   shared\n";

    struct CannedRunner {
        output: CommandOutput,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl CannedRunner {
        fn new(status: i32, stdout: &str, stderr: &str) -> Self {
            Self {
                output: CommandOutput {
                    status: Some(status),
                    stdout: stdout.to_string(),
                    stderr: stderr.to_string(),
                },
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl CommandRunner for CannedRunner {
        async fn run(&self, _program: &Path, args: &[&str]) -> Result<CommandOutput> {
            self.calls
                .lock()
                .unwrap()
                .push(args.iter().map(|a| a.to_string()).collect());
            Ok(self.output.clone())
        }
    }

    #[cfg(unix)]
    fn zoneadm_dir() -> TempDir {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zoneadm");
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        dir
    }

    #[test]
    fn test_payload_shape() {
        let facts = ZoneFacts::new(vec![ZoneRecord::new(
            "1", "sol11lab", "running", "/zones/sol11lab", "native", "shared",
        )]);
        let value = serde_json::to_value(&facts).unwrap();
        assert_eq!(value["changed"], false);
        assert_eq!(value["ansible_facts"]["zone_list"][0]["NAME"], "sol11lab");
    }

    #[test]
    fn test_failure_report() {
        let err = ZoneFactsError::CommandNotFound {
            candidates: vec!["zoneadm".to_string()],
        };
        let report = FailureReport::from(&err);
        assert!(report.failed);
        assert!(!report.changed);
        assert!(report.msg.contains("zoneadm"));
    }

    #[test]
    fn test_to_json_compact_and_pretty() {
        let facts = ZoneFacts::new(Vec::new());
        assert_eq!(
            to_json(&facts, false).unwrap(),
            r#"{"changed":false,"ansible_facts":{"zone_list":[]}}"#
        );
        assert!(to_json(&facts, true).unwrap().contains('\n'));
    }

    #[tokio::test]
    async fn test_unsupported_platform_short_circuits() {
        // Arrange
        let runner = CannedRunner::new(0, LISTING, "");
        let resolver = CommandResolver::new();

        // Act
        let err = gather_zone_facts(&OsFamily::Linux, &resolver, &runner, FactsRequest::default())
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, ZoneFactsError::UnsupportedPlatform { .. }));
        assert!(runner.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_command_not_found() {
        let empty = TempDir::new().unwrap();
        let runner = CannedRunner::new(0, LISTING, "");
        let resolver = CommandResolver::with_search_path(empty.path());

        let err = gather_zone_facts(&OsFamily::SunOs, &resolver, &runner, FactsRequest::default())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unable to find any of the supported commands in PATH: zoneadm"
        );
        assert!(runner.calls.lock().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_gather_runs_fixed_args_and_parses() {
        // Arrange
        let dir = zoneadm_dir();
        let runner = CannedRunner::new(0, LISTING, "ignored warning");
        let resolver = CommandResolver::with_search_path(dir.path());

        // Act
        let facts = gather_zone_facts(&OsFamily::SunOs, &resolver, &runner, FactsRequest::default())
            .await
            .unwrap();

        // Assert
        assert!(!facts.changed);
        assert_eq!(facts.zones().len(), 1);
        assert_eq!(facts.zones()[0].name(), "sol11lab");
        assert_eq!(
            *runner.calls.lock().unwrap(),
            vec![vec!["list", "-i", "-c", "-v"]]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_check_mode_matches_normal_mode() {
        let dir = zoneadm_dir();
        let resolver = CommandResolver::with_search_path(dir.path());

        let normal = gather_zone_facts(
            &OsFamily::SunOs,
            &resolver,
            &CannedRunner::new(0, LISTING, ""),
            FactsRequest { check_mode: false },
        )
        .await
        .unwrap();
        let check = gather_zone_facts(
            &OsFamily::SunOs,
            &resolver,
            &CannedRunner::new(0, LISTING, ""),
            FactsRequest { check_mode: true },
        )
        .await
        .unwrap();

        assert_eq!(normal, check);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_fails_with_stderr() {
        let dir = zoneadm_dir();
        let runner = CannedRunner::new(1, LISTING, "zoneadm: insufficient privileges\n");
        let resolver = CommandResolver::with_search_path(dir.path());

        let err = gather_zone_facts(&OsFamily::SunOs, &resolver, &runner, FactsRequest::default())
            .await
            .unwrap_err();

        match err {
            ZoneFactsError::CommandFailed { code, detail, .. } => {
                assert_eq!(code, Some(1));
                assert_eq!(detail, "zoneadm: insufficient privileges");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_malformed_output_fails() {
        let dir = zoneadm_dir();
        let listing = format!("{}   2 broken running /zones/broken native\n", LISTING);
        let runner = CannedRunner::new(0, &listing, "");
        let resolver = CommandResolver::with_search_path(dir.path());

        let err = gather_zone_facts(&OsFamily::SunOs, &resolver, &runner, FactsRequest::default())
            .await
            .unwrap_err();

        assert!(err
            .to_string()
            .ends_with("   2 broken running /zones/broken native"));
    }
}
