//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{ResumeError, Result};
use std::path::Path;

/// Largest indentation width accepted for the written document.
const MAX_JSON_INDENT: usize = 8;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ResumeError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults when the file
    /// does not exist. A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml turns an empty document into unit, not an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ResumeError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ResumeError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `resume_file` and `history_file` must be non-empty
    /// - `json_indent` must be between 1 and 8
    pub fn validate(&self) -> Result<()> {
        if self.resume_file.trim().is_empty() {
            return Err(ResumeError::UserError(
                "config validation failed: resume_file must not be empty".to_string(),
            ));
        }

        if self.history_file.trim().is_empty() {
            return Err(ResumeError::UserError(
                "config validation failed: history_file must not be empty".to_string(),
            ));
        }

        if self.json_indent == 0 || self.json_indent > MAX_JSON_INDENT {
            return Err(ResumeError::UserError(format!(
                "config validation failed: json_indent must be between 1 and {} (found {})",
                MAX_JSON_INDENT, self.json_indent
            )));
        }

        Ok(())
    }
}
