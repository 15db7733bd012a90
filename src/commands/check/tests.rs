//! Tests for the check command.

use super::*;
use crate::config::Config;
use crate::error::ResumeError;
use crate::store::ResumeStore;
use crate::test_support::{sample_resume, write_resume};
use std::fs;
use tempfile::TempDir;

/// Workspace whose resume was written by the store itself.
fn healthy_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    ResumeStore::new(temp_dir.path().join("resume.json"))
        .save(&sample_resume())
        .unwrap();
    temp_dir
}

#[test]
fn test_check_healthy_workspace() {
    let temp_dir = healthy_workspace();
    let ws = Workspace::resolve_from(temp_dir.path());

    let report = run_checks(&ws);

    assert!(!report.has_issues(), "unexpected issues: {:?}", report.issues);
    assert!(render_report(&report).contains("Resume is healthy"));
    assert!(cmd_check(&ws).is_ok());
}

#[test]
fn test_check_detects_missing_resume() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::resolve_from(temp_dir.path());

    let report = run_checks(&ws);

    let issues: Vec<_> = report.in_category("missing_resume").collect();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, IssueSeverity::Error);
    assert!(issues[0].path.as_ref().unwrap().ends_with("resume.json"));

    let err = cmd_check(&ws).unwrap_err();
    assert!(matches!(err, ResumeError::CheckFailed { errors: 1 }));
    assert_eq!(err.exit_code(), crate::exit_codes::SCHEMA_VIOLATION);
}

#[test]
fn test_check_detects_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("resume.json"), "{ not json").unwrap();
    let ws = Workspace::resolve_from(temp_dir.path());

    let report = run_checks(&ws);

    assert_eq!(report.in_category("malformed_json").count(), 1);
    assert_eq!(report.in_category("schema").count(), 0);
}

#[test]
fn test_check_reports_every_schema_violation() {
    let mut resume = sample_resume();
    resume.summary = "   ".to_string();
    resume.skills.push("Rust".to_string());
    resume.projects[0].id = "project-1".to_string();
    let (temp_dir, _path) = write_resume(&resume);
    let ws = Workspace::resolve_from(temp_dir.path());

    let report = run_checks(&ws);

    let paths: Vec<_> = report
        .in_category("schema")
        .filter_map(|i| i.path.as_deref())
        .collect();
    assert!(paths.contains(&"summary"), "paths: {:?}", paths);
    assert!(paths.contains(&"skills[2]"), "paths: {:?}", paths);
    assert!(paths.contains(&"projects[0].id"), "paths: {:?}", paths);
    assert_eq!(report.count(IssueSeverity::Error), paths.len());
}

#[test]
fn test_check_reports_structural_mismatch_as_schema_issue() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("resume.json"),
        r#"{"summary": "x", "experiences": [], "skills": "Rust", "projects": [], "education": []}"#,
    )
    .unwrap();
    let ws = Workspace::resolve_from(temp_dir.path());

    let report = run_checks(&ws);

    assert_eq!(report.in_category("schema").count(), 1);
    assert_eq!(report.in_category("malformed_json").count(), 0);
}

#[test]
fn test_check_warns_about_non_canonical_layout() {
    // write_resume omits the trailing newline the store always writes.
    let (temp_dir, _path) = write_resume(&sample_resume());
    let ws = Workspace::resolve_from(temp_dir.path());

    let report = run_checks(&ws);

    assert_eq!(report.in_category("formatting").count(), 1);
    assert!(!report.has_errors());
    assert!(cmd_check(&ws).is_ok());
}

#[test]
fn test_check_detects_broken_config_and_continues_with_defaults() {
    let temp_dir = healthy_workspace();
    fs::write(temp_dir.path().join("resumeforge.yaml"), "json_indent: 42\n").unwrap();
    let ws = Workspace::resolve_from(temp_dir.path());

    let report = run_checks(&ws);

    assert_eq!(report.in_category("config").count(), 1);
    // The default resume path still resolves to the healthy document.
    assert_eq!(report.in_category("missing_resume").count(), 0);
    assert_eq!(report.in_category("schema").count(), 0);
}

#[test]
fn test_check_follows_configured_resume_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        resume_file: "cv/main.json".to_string(),
        ..Config::default()
    };
    fs::write(
        temp_dir.path().join("resumeforge.yaml"),
        config.to_yaml().unwrap(),
    )
    .unwrap();
    let ws = Workspace::resolve_from(temp_dir.path());

    let report = run_checks(&ws);

    let missing: Vec<_> = report.in_category("missing_resume").collect();
    assert_eq!(missing.len(), 1);
    assert!(missing[0].path.as_ref().unwrap().ends_with("main.json"));
}

#[test]
fn test_check_warns_about_unreadable_history() {
    let temp_dir = healthy_workspace();
    fs::write(
        temp_dir.path().join("resume.history.ndjson"),
        "this is not an event\n",
    )
    .unwrap();
    let ws = Workspace::resolve_from(temp_dir.path());

    let report = run_checks(&ws);

    let history: Vec<_> = report.in_category("history").collect();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].severity, IssueSeverity::Warning);
    assert!(!report.has_errors());
}

#[test]
fn test_check_skips_history_when_recording_disabled() {
    let temp_dir = healthy_workspace();
    fs::write(
        temp_dir.path().join("resumeforge.yaml"),
        "record_history: false\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("resume.history.ndjson"), "garbage\n").unwrap();
    let ws = Workspace::resolve_from(temp_dir.path());

    let report = run_checks(&ws);

    assert_eq!(report.in_category("history").count(), 0);
}

#[test]
fn test_render_report_lists_issues_and_summary() {
    let mut report = CheckReport::new();
    report.push(
        Issue::new(IssueSeverity::Error, "schema", "must not be empty")
            .with_path("summary")
            .with_remediation("Write a summary."),
    );
    report.push(Issue::new(IssueSeverity::Warning, "history", "bad line"));

    let text = render_report(&report);

    assert!(text.contains("Issues detected (2):"));
    assert!(text.contains("1. [ERROR] schema - must not be empty"));
    assert!(text.contains("Path: summary"));
    assert!(text.contains("Fix:  Write a summary."));
    assert!(text.contains("2. [WARNING] history - bad line"));
    assert!(text.contains("Summary: 1 errors, 1 warnings."));
}
