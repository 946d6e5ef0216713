// file: src/executor.rs
// version: 1.0.0
// guid: 4cb86a0c-107b-4a7d-b663-f191a5a80714

//! External command execution
//!
//! `CommandRunner` isolates process spawning so the fact-gathering pipeline
//! can be driven by canned output in tests.

use crate::error::{Result, ZoneFactsError};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Default time allowed for the enumeration command
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Captured result of one command run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Best text to explain a failed run: stderr, else stdout
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Runs an external program and captures its output
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`. A non-zero exit status is not an error here.
    async fn run(&self, program: &Path, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs commands on the local host
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

#[async_trait::async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &Path, args: &[&str]) -> Result<CommandOutput> {
        debug!("Executing {} {:?}", program.display(), args);

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ZoneFactsError::execution(format!(
                    "Failed to spawn command {}: {}",
                    program.display(),
                    e
                ))
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                ZoneFactsError::timeout(format!(
                    "Command {} timed out after {} seconds",
                    program.display(),
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                ZoneFactsError::execution(format!("Command {} failed: {}", program.display(), e))
            })?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(
            "{} exited with {:?} ({} bytes of stdout)",
            program.display(),
            result.status,
            result.stdout.len()
        );

        Ok(result)
    }
}
