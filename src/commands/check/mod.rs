//! Implementation of the `resumeforge check` command.
//!
//! Diagnoses a workspace without modifying it. Reports:
//! - A config file that cannot be read or fails validation
//! - A missing or unreadable resume document
//! - A resume file that is not JSON
//! - Every schema violation in the document, not just the first
//! - A document that is valid but not in the layout the next save writes
//! - A history log that cannot be read back
//!
//! Exits with the schema-violation code when any error-severity issue is found.

mod checks;
mod display;

#[cfg(test)]
mod tests;

use crate::context::Workspace;
use crate::error::{ResumeError, Result};

pub use checks::*;
pub use display::*;

/// Severity level for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Warning: the workspace works, but something looks off.
    Warning,
    /// Error: edits will fail until this is fixed.
    Error,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueSeverity::Warning => write!(f, "WARNING"),
            IssueSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// A detected issue with a recommended fix.
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: IssueSeverity,
    /// Category of the issue (e.g. `schema`, `missing_resume`).
    pub category: String,
    pub description: String,
    /// File path or document path involved.
    pub path: Option<String>,
    /// Recommended remediation.
    pub remediation: Option<String>,
}

impl Issue {
    pub fn new(severity: IssueSeverity, category: &str, description: &str) -> Self {
        Self {
            severity,
            category: category.to_string(),
            description: description.to_string(),
            path: None,
            remediation: None,
        }
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn with_remediation(mut self, remediation: &str) -> Self {
        self.remediation = Some(remediation.to_string());
        self
    }
}

/// Result of running every check.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn count(&self, severity: IssueSeverity) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(IssueSeverity::Error) > 0
    }

    pub fn in_category(&self, category: &str) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.category == category)
    }
}

/// Run every check against a workspace.
pub fn run_checks(workspace: &Workspace) -> CheckReport {
    let mut report = CheckReport::new();

    let config = check_config(workspace, &mut report);
    check_resume(workspace, &config, &mut report);
    check_history(workspace, &config, &mut report);

    report
}

/// Execute the `resumeforge check` command.
pub fn cmd_check(workspace: &Workspace) -> Result<()> {
    let report = run_checks(workspace);
    print!("{}", render_report(&report));

    let errors = report.count(IssueSeverity::Error);
    if errors > 0 {
        return Err(ResumeError::CheckFailed { errors });
    }
    Ok(())
}
