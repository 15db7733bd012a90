//! Persistence of the resume document.
//!
//! [`ResumeStore`] is the only path to the document on disk. Every load
//! decodes and validates; every save validates before anything is written,
//! then replaces the file atomically. There is no caching: each call reads
//! or writes the whole document.

use crate::error::{ResumeError, Result};
use crate::fs::atomic_write_file;
use crate::schema::{Resume, SchemaViolations, Violation, validate};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// Default indentation width for the written document.
pub const DEFAULT_INDENT: usize = 2;

/// Handle to a resume document on disk.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    path: PathBuf,
    indent: usize,
}

impl ResumeStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            indent: DEFAULT_INDENT,
        }
    }

    /// Set the indentation width used by [`save`](Self::save).
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the raw document text.
    pub fn read_text(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            ResumeError::StorageError(format!(
                "failed to read resume file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Load, decode and validate the document.
    pub fn load(&self) -> Result<Resume> {
        let text = self.read_text()?;
        let resume = decode(&text)?;
        validate(&resume)?;

        tracing::debug!(
            path = %self.path.display(),
            experiences = resume.experiences.len(),
            skills = resume.skills.len(),
            projects = resume.projects.len(),
            education = resume.education.len(),
            "loaded resume"
        );
        Ok(resume)
    }

    /// Validate and atomically write the document.
    ///
    /// A document that fails validation is never written.
    pub fn save(&self, resume: &Resume) -> Result<()> {
        if let Err(violations) = validate(resume) {
            tracing::error!(
                path = %self.path.display(),
                %violations,
                "refusing to save invalid resume"
            );
            return Err(violations.into());
        }

        let text = self.encode(resume)?;
        atomic_write_file(&self.path, &text)?;

        tracing::debug!(path = %self.path.display(), bytes = text.len(), "saved resume");
        Ok(())
    }

    /// Render the document the way [`save`](Self::save) writes it:
    /// declared field order, indented, trailing newline.
    pub fn encode(&self, resume: &Resume) -> Result<String> {
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        resume.serialize(&mut serializer).map_err(|e| {
            ResumeError::StorageError(format!("failed to serialize resume: {}", e))
        })?;
        buf.push(b'\n');

        String::from_utf8(buf).map_err(|e| {
            ResumeError::StorageError(format!("serialized resume is not UTF-8: {}", e))
        })
    }
}

/// Decode document text into a [`Resume`] without validating it.
///
/// Structural mismatches (missing fields, wrong JSON types) are schema
/// violations; text that is not JSON at all is a storage failure.
pub fn decode(text: &str) -> Result<Resume> {
    serde_json::from_str(text).map_err(|e| {
        if e.is_data() {
            ResumeError::SchemaViolation(SchemaViolations::from(vec![Violation::new(
                "document",
                e.to_string(),
            )]))
        } else {
            ResumeError::StorageError(format!("resume file is not valid JSON: {}", e))
        }
    })
}
