//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Name of the optional config file in the workspace directory.
pub const CONFIG_FILE_NAME: &str = "resumeforge.yaml";

/// Configuration for a resumeforge workspace.
///
/// This struct represents the contents of `resumeforge.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Document settings
    // =========================================================================
    /// Path to the resume document, relative to the workspace root.
    #[serde(default = "default_resume_file")]
    pub resume_file: String,

    /// Indentation width (spaces) used when writing the document.
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,

    // =========================================================================
    // History settings
    // =========================================================================
    /// Whether applied edits are appended to the history log.
    #[serde(default = "default_true")]
    pub record_history: bool,

    /// Path to the NDJSON history log, relative to the workspace root.
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

fn default_resume_file() -> String {
    "resume.json".to_string()
}
fn default_json_indent() -> usize {
    2
}
fn default_true() -> bool {
    true
}
fn default_history_file() -> String {
    "resume.history.ndjson".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resume_file: default_resume_file(),
            json_indent: default_json_indent(),
            record_history: default_true(),
            history_file: default_history_file(),
        }
    }
}
