//! Schema validation for resume documents.
//!
//! Serde decoding already enforces field presence and JSON types. This pass
//! adds the rules serde cannot express: required strings must be non-empty,
//! ids must be well-formed and unique per collection, and skills must be
//! unique. All violations are collected, not just the first.

use super::{Entity, Resume, id_suffix};
use std::collections::HashSet;
use std::fmt;

/// A single rule violation, addressed by a JSON-ish path
/// (e.g. `experiences[1].company`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// One or more violations found in a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolations(Vec<Violation>);

impl SchemaViolations {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any violation is reported at exactly `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.0.iter().any(|v| v.path == path)
    }
}

impl From<Vec<Violation>> for SchemaViolations {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl fmt::Display for SchemaViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaViolations {}

/// Validate a decoded resume.
///
/// Returns every violation found; an `Ok` means the document may be persisted.
pub fn validate(resume: &Resume) -> Result<(), SchemaViolations> {
    let mut checker = Checker::default();

    checker.require_text("summary", &resume.summary);

    checker.require_ids("experiences", &resume.experiences);
    for (i, exp) in resume.experiences.iter().enumerate() {
        let base = format!("experiences[{}]", i);
        checker.require_text(format!("{}.company", base), &exp.company);
        checker.require_text(format!("{}.role", base), &exp.role);
        checker.require_text(format!("{}.dates", base), &exp.dates);
    }

    let mut seen = HashSet::new();
    for (i, skill) in resume.skills.iter().enumerate() {
        let path = format!("skills[{}]", i);
        checker.require_text(path.clone(), skill);
        if !seen.insert(skill.as_str()) {
            checker.push(path, format!("duplicate skill '{}'", skill));
        }
    }

    checker.require_ids("projects", &resume.projects);
    for (i, proj) in resume.projects.iter().enumerate() {
        let base = format!("projects[{}]", i);
        checker.require_text(format!("{}.name", base), &proj.name);
        checker.require_text(format!("{}.description", base), &proj.description);
    }

    checker.require_ids("education", &resume.education);
    for (i, edu) in resume.education.iter().enumerate() {
        let base = format!("education[{}]", i);
        checker.require_text(format!("{}.degree", base), &edu.degree);
        checker.require_text(format!("{}.institution", base), &edu.institution);
        checker.require_text(format!("{}.year", base), &edu.year);
    }

    checker.finish()
}

#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }

    fn require_text(&mut self, path: impl Into<String>, value: &str) {
        if value.trim().is_empty() {
            self.push(path, "must not be empty");
        }
    }

    fn require_ids<E: Entity>(&mut self, collection: &str, entities: &[E]) {
        let mut seen = HashSet::new();
        for (i, entity) in entities.iter().enumerate() {
            let path = format!("{}[{}].id", collection, i);
            let id = entity.id();
            if id_suffix(E::KIND, id).is_none() {
                self.push(
                    path.clone(),
                    format!(
                        "'{}' is not a valid id (expected {}_<positive integer>)",
                        id,
                        E::KIND.prefix()
                    ),
                );
            }
            if !seen.insert(id) {
                self.push(path, format!("duplicate id '{}'", id));
            }
        }
    }

    fn finish(self) -> Result<(), SchemaViolations> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolations(self.violations))
        }
    }
}
