//! Top-level sections of the resume document.

use super::outcome::Rejection;
use crate::error::{ResumeError, Result};
use crate::schema::Resume;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Section names as they appear in the document, in document order.
pub const SECTION_NAMES: [&str; 5] = ["summary", "experiences", "skills", "projects", "education"];

/// One of the five top-level fields of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Experiences,
    Skills,
    Projects,
    Education,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Summary,
        Section::Experiences,
        Section::Skills,
        Section::Projects,
        Section::Education,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Experiences => "experiences",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Education => "education",
        }
    }

    /// JSON snapshot of this section of `resume`.
    pub fn snapshot(self, resume: &Resume) -> Result<Value> {
        let value = match self {
            Section::Summary => serde_json::to_value(&resume.summary),
            Section::Experiences => serde_json::to_value(&resume.experiences),
            Section::Skills => serde_json::to_value(&resume.skills),
            Section::Projects => serde_json::to_value(&resume.projects),
            Section::Education => serde_json::to_value(&resume.education),
        };
        value.map_err(|e| {
            ResumeError::StorageError(format!("failed to serialize section '{}': {}", self, e))
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = Rejection;

    /// Exact, case-sensitive match on the document field name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| Rejection::InvalidSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_resume;

    #[test]
    fn test_parse_every_section_name() {
        for (name, section) in SECTION_NAMES.iter().zip(Section::ALL) {
            assert_eq!(name.parse::<Section>().unwrap(), section);
            assert_eq!(section.to_string(), *name);
        }
    }

    #[test]
    fn test_parse_unknown_section_is_rejected() {
        assert_eq!(
            "awards".parse::<Section>(),
            Err(Rejection::InvalidSection("awards".to_string()))
        );
        assert!("Skills".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_snapshot_matches_document_fields() {
        let resume = sample_resume();
        let whole = serde_json::to_value(&resume).unwrap();

        for section in Section::ALL {
            assert_eq!(section.snapshot(&resume).unwrap(), whole[section.as_str()]);
        }
    }
}
