//! Individual check functions for the check command.

use super::{CheckReport, Issue, IssueSeverity};
use crate::config::Config;
use crate::context::Workspace;
use crate::error::ResumeError;
use crate::events::HistoryLog;
use crate::schema::{SchemaViolations, validate};
use crate::store::{ResumeStore, decode};

/// Check that the config file, if present, loads and validates.
///
/// Returns the config the remaining checks should use; a broken config
/// falls back to defaults so the document can still be inspected.
pub fn check_config(workspace: &Workspace, report: &mut CheckReport) -> Config {
    match workspace.load_config() {
        Ok(config) => config,
        Err(e) => {
            report.push(
                Issue::new(IssueSeverity::Error, "config", &e.to_string())
                    .with_path(&workspace.config_path.display().to_string())
                    .with_remediation(
                        "Fix or remove the config file. Defaults are used for the remaining checks.",
                    ),
            );
            Config::default()
        }
    }
}

/// Check that the resume document exists, is JSON, and satisfies the schema.
pub fn check_resume(workspace: &Workspace, config: &Config, report: &mut CheckReport) {
    let store =
        ResumeStore::new(workspace.resume_path(config)).with_indent(config.json_indent);
    let file = store.path().display().to_string();

    if !store.exists() {
        report.push(
            Issue::new(
                IssueSeverity::Error,
                "missing_resume",
                "Resume document does not exist",
            )
            .with_path(&file)
            .with_remediation(
                "Create the document, or point --resume / resume_file at an existing one.",
            ),
        );
        return;
    }

    let text = match store.read_text() {
        Ok(text) => text,
        Err(e) => {
            report.push(
                Issue::new(IssueSeverity::Error, "unreadable_resume", &e.to_string())
                    .with_path(&file),
            );
            return;
        }
    };

    let resume = match decode(&text) {
        Ok(resume) => resume,
        Err(ResumeError::SchemaViolation(violations)) => {
            push_violations(&violations, report);
            return;
        }
        Err(e) => {
            report.push(
                Issue::new(IssueSeverity::Error, "malformed_json", &e.to_string())
                    .with_path(&file)
                    .with_remediation("Restore the file from a backup or fix the JSON by hand."),
            );
            return;
        }
    };

    if let Err(violations) = validate(&resume) {
        push_violations(&violations, report);
        return;
    }

    if let Ok(canonical) = store.encode(&resume)
        && canonical != text
    {
        report.push(
            Issue::new(
                IssueSeverity::Warning,
                "formatting",
                "Document is valid but will be reformatted on the next edit",
            )
            .with_path(&file),
        );
    }
}

fn push_violations(violations: &SchemaViolations, report: &mut CheckReport) {
    for violation in violations.violations() {
        report.push(
            Issue::new(IssueSeverity::Error, "schema", &violation.message)
                .with_path(&violation.path),
        );
    }
}

/// Check that the history log, when enabled, can be read back.
pub fn check_history(workspace: &Workspace, config: &Config, report: &mut CheckReport) {
    if !config.record_history {
        return;
    }

    let log = HistoryLog::new(workspace.history_path(config));
    if let Err(e) = log.read_all() {
        report.push(
            Issue::new(IssueSeverity::Warning, "history", &e.to_string())
                .with_path(&log.path().display().to_string())
                .with_remediation(
                    "Move the file aside; a fresh log is started on the next edit.",
                ),
        );
    }
}
