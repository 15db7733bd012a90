//! resumeforge: schema-validated, section-scoped editing of a JSON resume.
//!
//! The [`editor::ResumeEditor`] is the operation surface: one method per
//! read or write, each loading the whole document, applying one change,
//! validating and saving atomically. The binary in `main.rs` wraps it in a
//! CLI; an orchestration layer can call the editor directly and render each
//! [`editor::Outcome`] as its observation text.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod editor;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod schema;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;
