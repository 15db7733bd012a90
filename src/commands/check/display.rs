//! Rendering for the check report.

use super::{CheckReport, IssueSeverity};
use std::fmt::Write;

/// Render the report as the text `check` prints.
pub fn render_report(report: &CheckReport) -> String {
    let mut out = String::new();

    if !report.has_issues() {
        let _ = writeln!(out, "Resume is healthy. No issues detected.");
        return out;
    }

    let _ = writeln!(out, "Issues detected ({}):", report.issues.len());
    let _ = writeln!(out);

    for (i, issue) in report.issues.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. [{}] {} - {}",
            i + 1,
            issue.severity,
            issue.category,
            issue.description
        );

        if let Some(path) = &issue.path {
            let _ = writeln!(out, "     Path: {}", path);
        }

        if let Some(remediation) = &issue.remediation {
            let _ = writeln!(out, "     Fix:  {}", remediation);
        }

        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "Summary: {} errors, {} warnings.",
        report.count(IssueSeverity::Error),
        report.count(IssueSeverity::Warning)
    );

    out
}
