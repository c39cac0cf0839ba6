mod summary;

pub use summary::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Hook configuration. Every field has a default, so an empty or missing
/// file yields the stock behavior.
///
/// Only presentation is configurable. The trigger sources and the intel
/// file locations are fixed (see [`crate::payload::TRIGGER_SOURCES`] and
/// [`crate::intel::INTEL_DIR`]).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&raw)?)
    }

    /// Parse the file at `path` if it exists, otherwise use defaults.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> crate::Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let tag = &self.output.tag;
        if tag.is_empty() || tag.contains(['<', '>']) || tag.chars().any(char::is_whitespace) {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "output.tag".into(),
                message: "tag must be a non-empty name without brackets or whitespace".into(),
            });
        }

        if self.summary.token_budget == 0 {
            errors.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: "summary.token_budget".into(),
                message: "a zero token budget flags every summary as over budget".into(),
            });
        }

        errors
    }
}
