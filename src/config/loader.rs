// file: src/config/loader.rs
// version: 1.0.0
// guid: 61fb065e-eb5d-4ef9-a37d-09260f8f8510

//! Configuration file loading and environment variable substitution

use super::ZoneFactsConfig;
use crate::error::ZoneFactsError;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new config loader seeded from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<ZoneFactsConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            ZoneFactsError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        self.load_str(&content)
    }

    /// Load configuration from YAML text
    pub fn load_str(&self, content: &str) -> Result<ZoneFactsConfig> {
        let expanded = self.expand_env_vars(content)?;
        let config: ZoneFactsConfig = if expanded.trim().is_empty() {
            ZoneFactsConfig::default()
        } else {
            serde_yaml::from_str(&expanded)?
        };

        config.validate()?;

        Ok(config)
    }

    /// Expand `${VAR}` references
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ZoneFactsError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing_vars = Vec::new();
        let expanded = re.replace_all(content, |caps: &regex::Captures| {
            match self.env_vars.get(&caps[1]) {
                Some(value) => value.clone(),
                None => {
                    missing_vars.push(caps[1].to_string());
                    String::new()
                }
            }
        });

        if !missing_vars.is_empty() {
            return Err(ZoneFactsError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(expanded.into_owned())
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env_vars.insert(key.into(), value.into());
    }
}
