//! Resume document model.
//!
//! This module defines the canonical shape of the resume document and the
//! entities nested inside it. Field order in the structs is the field order
//! on disk. Unknown fields are preserved in `extra` maps so a document edited
//! by resumeforge round-trips without losing data it does not understand.
//!
//! # Document Format
//!
//! ```text
//! {
//!   "summary": "Backend engineer ...",
//!   "experiences": [
//!     { "id": "exp_2", "company": "Acme", "role": "Engineer", "dates": "2021-2024", "bullets": [] }
//!   ],
//!   "skills": ["Rust", "SQL"],
//!   "projects": [{ "id": "proj_1", "name": "...", "description": "..." }],
//!   "education": [{ "id": "edu_1", "degree": "...", "institution": "...", "year": "2019" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

mod ids;
mod validate;

pub use ids::{EntityKind, format_id, id_suffix, next_id};
pub use validate::{SchemaViolations, Violation, validate};

/// The root aggregate: one resume, persisted as one JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Professional summary. Required and non-empty.
    pub summary: String,

    /// Work history, newest first by convention.
    #[serde(default)]
    pub experiences: Vec<Experience>,

    /// Skills, unique by exact match.
    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub education: Vec<Education>,

    /// Unknown top-level fields, preserved across load/save.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Identifier of the form `exp_<n>`.
    pub id: String,
    pub company: String,
    pub role: String,
    /// Employment period, free text (e.g. "2021 - Present").
    pub dates: String,
    /// Bullet points, addressed by 0-based index.
    #[serde(default)]
    pub bullets: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Identifier of the form `proj_<n>`.
    pub id: String,
    pub name: String,
    pub description: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// An education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Identifier of the form `edu_<n>`.
    pub id: String,
    /// Degree or certification name.
    pub degree: String,
    pub institution: String,
    /// Year or period, free text.
    pub year: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// An identified record inside one of the resume's collections.
pub trait Entity {
    /// The collection this entity belongs to; decides the id prefix.
    const KIND: EntityKind;

    /// The entity's identifier.
    fn id(&self) -> &str;
}

impl Entity for Experience {
    const KIND: EntityKind = EntityKind::Experience;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Education {
    const KIND: EntityKind = EntityKind::Education;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resume {
    /// Create a resume with the given summary and empty collections.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            experiences: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            education: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl Experience {
    pub fn new(
        id: impl Into<String>,
        company: impl Into<String>,
        role: impl Into<String>,
        dates: impl Into<String>,
        bullets: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            company: company.into(),
            role: role.into(),
            dates: dates.into(),
            bullets,
            extra: BTreeMap::new(),
        }
    }
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            extra: BTreeMap::new(),
        }
    }
}

impl Education {
    pub fn new(
        id: impl Into<String>,
        degree: impl Into<String>,
        institution: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            degree: degree.into(),
            institution: institution.into(),
            year: year.into(),
            extra: BTreeMap::new(),
        }
    }
}
