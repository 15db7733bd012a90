//! Tests for config functionality.

use crate::config::Config;
use crate::error::ResumeError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.resume_file, "resume.json");
    assert_eq!(config.json_indent, 2);
    assert!(config.record_history);
    assert_eq!(config.history_file, "resume.history.ndjson");
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
resume_file: data/cv.json
record_history: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.resume_file, "data/cv.json");
    assert!(!config.record_history);

    // Unspecified values should use defaults
    assert_eq!(config.json_indent, 2);
    assert_eq!(config.history_file, "resume.history.ndjson");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
json_indent: 4
model: gemini-2.0-flash
agents:
  - summary
  - skills
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.json_indent, 4);
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("resume_file: [unclosed").unwrap_err();
    assert!(matches!(err, ResumeError::UserError(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validation_rejects_zero_indent() {
    let err = Config::from_yaml("json_indent: 0").unwrap_err();
    assert!(err.to_string().contains("json_indent must be between 1 and 8"));
}

#[test]
fn test_validation_rejects_oversized_indent() {
    let err = Config::from_yaml("json_indent: 12").unwrap_err();
    assert!(err.to_string().contains("found 12"));
}

#[test]
fn test_validation_rejects_empty_paths() {
    let err = Config::from_yaml("resume_file: '  '").unwrap_err();
    assert!(err.to_string().contains("resume_file must not be empty"));

    let err = Config::from_yaml("history_file: ''").unwrap_err();
    assert!(err.to_string().contains("history_file must not be empty"));
}

#[test]
fn test_yaml_roundtrip() {
    let config = Config {
        resume_file: "cv.json".to_string(),
        json_indent: 4,
        record_history: false,
        history_file: "edits.ndjson".to_string(),
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_or_default_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("resumeforge.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("resumeforge.yaml");
    std::fs::write(&path, "resume_file: me.json\n").unwrap();

    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config.resume_file, "me.json");
}

#[test]
fn test_load_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
