// file: src/error.rs
// version: 1.0.0
// guid: 563c22fd-9276-4326-970d-97aa1aff4d5a

//! Error types for zone fact gathering

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, ZoneFactsError>;

/// Every way a fact-gathering run can fail
#[derive(Error, Debug)]
pub enum ZoneFactsError {
    #[error("This tool requires SunOS, but the host operating system is {found}")]
    UnsupportedPlatform { found: String },

    #[error("Unable to find any of the supported commands in PATH: {}", .candidates.join(", "))]
    CommandNotFound { candidates: Vec<String> },

    #[error("Command `{command}` failed with exit code {}: {detail}", exit_code_label(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        detail: String,
    },

    #[error(
        "Expected `{command}` table layout \"ID,NAME,STATUS,PATH,BRAND,IP\" but got something else: {line}"
    )]
    MalformedOutput { command: String, line: String },

    #[error("Command execution error: {0}")]
    Execution(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

impl ZoneFactsError {
    /// Create a new malformed output error for the given command and raw line
    pub fn malformed(command: impl Into<String>, line: impl Into<String>) -> Self {
        Self::MalformedOutput {
            command: command.into(),
            line: line.into(),
        }
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
