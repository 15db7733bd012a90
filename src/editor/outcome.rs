//! Typed results of editor operations.
//!
//! An operation either completes ([`Outcome::Done`]) or is turned down for
//! a reason the caller can act on ([`Outcome::Rejected`]). Both render to
//! the plain text the orchestration layer reads back as an observation, but
//! code and tests can branch on the variant instead of matching strings.

use crate::error::{ResumeError, Result};
use crate::schema::EntityKind;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::section::SECTION_NAMES;

/// Longest bullet text echoed back in full by a removal confirmation.
pub const BULLET_PREVIEW_CHARS: usize = 50;

/// Result of a single editor operation.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation completed; writes have been persisted.
    Done(T),
    /// The operation was refused and nothing was written.
    Rejected(Rejection),
}

/// Why an operation was refused. These are expected conditions, not faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("{kind} with ID '{id}' not found.")]
    NotFound { kind: EntityKind, id: String },

    /// A required value was empty or whitespace-only.
    #[error("{0} cannot be empty.")]
    EmptyField(&'static str),

    #[error("Bullet index {index} out of range. Experience has {count} bullets.")]
    BulletOutOfRange { index: usize, count: usize },

    #[error("Skill '{0}' already exists.")]
    DuplicateSkill(String),

    #[error("Skill '{0}' not found.")]
    SkillNotFound(String),

    #[error("Invalid section '{0}'. Valid sections: {names}", names = SECTION_NAMES.join(", "))]
    InvalidSection(String),
}

/// What a successful write reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// The document was rewritten.
    Saved,
    /// A new entity was created with the given id.
    Added { kind: EntityKind, id: String },
    /// A bullet was removed; holds the full removed text.
    BulletRemoved(String),
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// The payload, if the operation completed.
    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Done(_) => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Done(value) => Outcome::Done(f(value)),
            Outcome::Rejected(rejection) => Outcome::Rejected(rejection),
        }
    }

    pub fn into_result(self) -> std::result::Result<T, Rejection> {
        self.into()
    }
}

impl<T> From<std::result::Result<T, Rejection>> for Outcome<T> {
    fn from(result: std::result::Result<T, Rejection>) -> Self {
        match result {
            Ok(value) => Outcome::Done(value),
            Err(rejection) => Outcome::Rejected(rejection),
        }
    }
}

impl<T> From<Outcome<T>> for std::result::Result<T, Rejection> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Done(value) => Ok(value),
            Outcome::Rejected(rejection) => Err(rejection),
        }
    }
}

impl<T: Serialize> Outcome<T> {
    /// Render for the orchestration layer: indented JSON for a completed
    /// read, the error line for a rejection.
    pub fn to_observation(&self) -> Result<String> {
        match self {
            Outcome::Done(value) => to_pretty_json(value),
            Outcome::Rejected(rejection) => Ok(format!("Error: {}", rejection)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done(value) => write!(f, "{}", value),
            Outcome::Rejected(rejection) => write!(f, "Error: {}", rejection),
        }
    }
}

impl Confirmation {
    /// Id of the created entity, for `Added` confirmations.
    pub fn added_id(&self) -> Option<&str> {
        match self {
            Confirmation::Added { id, .. } => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::Saved => write!(f, "Resume saved successfully."),
            Confirmation::Added { kind, id } => {
                write!(f, "{} added successfully with ID: {}", kind, id)
            }
            Confirmation::BulletRemoved(text) => {
                write!(f, "Bullet removed: '{}'", bullet_preview(text))
            }
        }
    }
}

/// Shorten long bullet text for echoing back, marking the cut with `...`.
pub fn bullet_preview(text: &str) -> String {
    if text.chars().count() > BULLET_PREVIEW_CHARS {
        let head: String = text.chars().take(BULLET_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Indented JSON, as handed to the orchestration layer for reads.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ResumeError::StorageError(format!("failed to serialize snapshot: {}", e)))
}
