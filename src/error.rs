//! Error types for resumeforge.
//!
//! Uses thiserror for derive macros. Only environment-facing and
//! programmer-facing failures live here; expected, caller-triggerable
//! failures (unknown id, empty input, ...) are [`Rejection`]s carried inside
//! an [`Outcome`](crate::editor::Outcome) instead.

use crate::editor::Rejection;
use crate::exit_codes;
use crate::schema::SchemaViolations;
use thiserror::Error;

/// Main error type for resumeforge operations.
#[derive(Error, Debug)]
pub enum ResumeError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// An edit was rejected; only raised at the CLI boundary, where a
    /// rejection has to become a non-zero exit.
    #[error("{0}")]
    Rejected(#[from] Rejection),

    /// The document failed schema validation. Nothing was written.
    #[error("schema validation failed: {0}")]
    SchemaViolation(#[from] SchemaViolations),

    /// The resume document could not be read, parsed or written.
    #[error("storage failure: {0}")]
    StorageError(String),

    /// `check` found problems that make the workspace unusable.
    #[error("check found {errors} error(s)")]
    CheckFailed { errors: usize },
}

impl ResumeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ResumeError::UserError(_) => exit_codes::USER_ERROR,
            ResumeError::Rejected(_) => exit_codes::USER_ERROR,
            ResumeError::SchemaViolation(_) => exit_codes::SCHEMA_VIOLATION,
            ResumeError::StorageError(_) => exit_codes::STORAGE_FAILURE,
            ResumeError::CheckFailed { .. } => exit_codes::SCHEMA_VIOLATION,
        }
    }
}

/// Result type alias for resumeforge operations.
pub type Result<T> = std::result::Result<T, ResumeError>;
