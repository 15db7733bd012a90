//! Edit history for resumeforge.
//!
//! Every applied edit can be appended to an NDJSON log (one JSON object per
//! line) next to the resume document. The log is an audit trail only: the
//! document itself is always the source of truth, and nothing is replayed
//! from the log.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The edit performed (`add_skill`, `remove_bullet`, ...)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `target`: Optional entity id or skill the edit applied to
//! - `details`: Freeform object with action-specific details
//!
//! ```no_run
//! use resumeforge::events::{EditAction, Event, HistoryLog};
//! use serde_json::json;
//!
//! let log = HistoryLog::new("resume.history.ndjson");
//! let event = Event::new(EditAction::AddSkill)
//!     .with_target("Rust")
//!     .with_details(json!({"count": 12}));
//! log.append(&event)?;
//! # Ok::<(), resumeforge::error::ResumeError>(())
//! ```

use crate::error::{ResumeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Edits that can be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditAction {
    UpdateSummary,
    AddExperience,
    UpdateExperience,
    RemoveExperience,
    AddBullet,
    UpdateBullet,
    RemoveBullet,
    AddSkill,
    RemoveSkill,
    AddProject,
    UpdateProject,
    RemoveProject,
    AddEducation,
    UpdateEducation,
    RemoveEducation,
}

impl std::fmt::Display for EditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EditAction::UpdateSummary => "update_summary",
            EditAction::AddExperience => "add_experience",
            EditAction::UpdateExperience => "update_experience",
            EditAction::RemoveExperience => "remove_experience",
            EditAction::AddBullet => "add_bullet",
            EditAction::UpdateBullet => "update_bullet",
            EditAction::RemoveBullet => "remove_bullet",
            EditAction::AddSkill => "add_skill",
            EditAction::RemoveSkill => "remove_skill",
            EditAction::AddProject => "add_project",
            EditAction::UpdateProject => "update_project",
            EditAction::RemoveProject => "remove_project",
            EditAction::AddEducation => "add_education",
            EditAction::UpdateEducation => "update_education",
            EditAction::RemoveEducation => "remove_education",
        };
        f.pad(name)
    }
}

/// A single history record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the edit was applied.
    pub ts: DateTime<Utc>,

    pub action: EditAction,

    /// Who applied the edit (e.g., `user@HOST`).
    pub actor: String,

    /// Entity id (or skill) the edit applied to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Freeform details object with action-specific information.
    #[serde(default)]
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EditAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            target: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            ResumeError::StorageError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append-only NDJSON history file.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event as a single line, creating the file if needed.
    pub fn append(&self, event: &Event) -> Result<()> {
        let json_line = event.to_ndjson_line()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                ResumeError::StorageError(format!(
                    "failed to create history directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ResumeError::StorageError(format!(
                    "failed to open history file '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{}", json_line)
            .and_then(|()| file.sync_all())
            .map_err(|e| {
                ResumeError::StorageError(format!(
                    "failed to write event to '{}': {}",
                    self.path.display(),
                    e
                ))
            })
    }

    /// Read every recorded event, oldest first. A missing file is an empty history.
    pub fn read_all(&self) -> Result<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            ResumeError::StorageError(format!(
                "failed to read history file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).map_err(|e| {
                    ResumeError::StorageError(format!(
                        "malformed event on line {} of '{}': {}",
                        i + 1,
                        self.path.display(),
                        e
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_event_serializes_to_single_line() {
        let event = Event::new(EditAction::AddProject)
            .with_target("proj_2")
            .with_details(json!({"name": "ledger"}));
        let line = event.to_ndjson_line().unwrap();

        assert!(!line.contains('\n'));
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["action"], "add_project");
        assert_eq!(parsed["target"], "proj_2");
        assert_eq!(parsed["details"]["name"], "ledger");
        assert!(parsed["actor"].as_str().unwrap().contains('@'));
    }

    #[test]
    fn test_event_without_target_omits_field() {
        let line = Event::new(EditAction::UpdateSummary)
            .to_ndjson_line()
            .unwrap();
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert!(parsed.get("target").is_none());
    }

    #[test]
    fn test_action_display_matches_serde_name() {
        for action in [
            EditAction::UpdateSummary,
            EditAction::RemoveBullet,
            EditAction::AddEducation,
        ] {
            let serialized = serde_json::to_value(action).unwrap();
            assert_eq!(serialized, Value::String(action.to_string()));
        }
    }

    #[test]
    fn test_append_and_read_back_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let log = HistoryLog::new(temp_dir.path().join("history").join("edits.ndjson"));

        log.append(&Event::new(EditAction::AddSkill).with_target("Rust"))
            .unwrap();
        log.append(&Event::new(EditAction::RemoveSkill).with_target("Go"))
            .unwrap();

        let events = log.read_all().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action, EditAction::AddSkill);
        assert_eq!(events[1].target.as_deref(), Some("Go"));

        let raw = fs::read_to_string(log.path()).unwrap();
        assert_eq!(raw.lines().count(), 2);
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn test_read_missing_history_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let log = HistoryLog::new(temp_dir.path().join("none.ndjson"));
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_read_malformed_line_reports_line_number() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edits.ndjson");
        let good = Event::new(EditAction::AddSkill).to_ndjson_line().unwrap();
        fs::write(&path, format!("{}\nnot json\n", good)).unwrap();

        let err = HistoryLog::new(&path).read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
