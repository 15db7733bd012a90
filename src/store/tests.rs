//! Tests for loading and saving the resume document.

use super::*;
use crate::test_support::{read_back, sample_resume, write_resume};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_valid_document() {
    let (_dir, path) = write_resume(&sample_resume());
    let resume = ResumeStore::new(&path).load().unwrap();
    assert_eq!(resume, sample_resume());
}

#[test]
fn test_load_missing_file_is_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ResumeStore::new(temp_dir.path().join("resume.json"))
        .load()
        .unwrap_err();
    assert!(matches!(err, ResumeError::StorageError(_)));
    assert!(err.to_string().contains("failed to read resume file"));
}

#[test]
fn test_load_malformed_json_is_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("resume.json");
    fs::write(&path, "{ \"summary\": ").unwrap();

    let err = ResumeStore::new(&path).load().unwrap_err();
    assert!(matches!(err, ResumeError::StorageError(_)));
}

#[test]
fn test_load_structural_mismatch_is_schema_violation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("resume.json");
    fs::write(&path, r#"{ "experiences": [] }"#).unwrap();

    let err = ResumeStore::new(&path).load().unwrap_err();
    match err {
        ResumeError::SchemaViolation(violations) => {
            assert!(violations.contains_path("document"));
            assert!(violations.to_string().contains("summary"));
        }
        other => panic!("expected schema violation, got {other:?}"),
    }
}

#[test]
fn test_load_rule_violation_is_schema_violation() {
    let mut resume = sample_resume();
    resume.projects[0].name = String::new();
    let (_dir, path) = write_resume(&resume);

    let err = ResumeStore::new(&path).load().unwrap_err();
    match err {
        ResumeError::SchemaViolation(violations) => {
            assert!(violations.contains_path("projects[0].name"));
        }
        other => panic!("expected schema violation, got {other:?}"),
    }
}

#[test]
fn test_save_invalid_document_writes_nothing() {
    let (_dir, path) = write_resume(&sample_resume());
    let before = fs::read_to_string(&path).unwrap();

    let mut broken = sample_resume();
    broken.summary = "  ".to_string();
    let err = ResumeStore::new(&path).save(&broken).unwrap_err();

    assert!(matches!(err, ResumeError::SchemaViolation(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_save_creates_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out").join("resume.json");

    ResumeStore::new(&path).save(&sample_resume()).unwrap();

    assert_eq!(read_back(&path), sample_resume());
}

#[test]
fn test_roundtrip_without_mutation_preserves_content() {
    let (_dir, path) = write_resume(&sample_resume());
    let original: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    let store = ResumeStore::new(&path);
    let resume = store.load().unwrap();
    store.save(&resume).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, original);
}

#[test]
fn test_second_save_is_byte_identical() {
    let (_dir, path) = write_resume(&sample_resume());
    let store = ResumeStore::new(&path);

    store.save(&store.load().unwrap()).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    store.save(&store.load().unwrap()).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_roundtrip_preserves_unknown_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("resume.json");
    fs::write(
        &path,
        r#"{
  "summary": "Hi",
  "links": { "github": "https://github.com/example" },
  "education": [
    { "id": "edu_1", "degree": "BA", "institution": "U", "year": "2010", "gpa": "3.9" }
  ]
}"#,
    )
    .unwrap();

    let store = ResumeStore::new(&path);
    store.save(&store.load().unwrap()).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["links"]["github"], "https://github.com/example");
    assert_eq!(saved["education"][0]["gpa"], "3.9");
}

#[test]
fn test_encode_uses_two_space_indent_and_trailing_newline() {
    let store = ResumeStore::new("unused.json");
    let text = store.encode(&sample_resume()).unwrap();

    assert!(text.starts_with("{\n  \"summary\""));
    assert!(text.ends_with("}\n"));
    assert_eq!(
        text,
        format!(
            "{}\n",
            serde_json::to_string_pretty(&sample_resume()).unwrap()
        )
    );
}

#[test]
fn test_encode_respects_custom_indent() {
    let store = ResumeStore::new("unused.json").with_indent(4);
    let text = store.encode(&sample_resume()).unwrap();
    assert!(text.starts_with("{\n    \"summary\""));
}

#[test]
fn test_decode_does_not_validate() {
    let resume = decode(r#"{ "summary": "" }"#).unwrap();
    assert!(resume.summary.is_empty());
}
