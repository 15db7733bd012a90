//! Filesystem utilities for resumeforge.
//!
//! The resume document is rewritten in full on every edit, so writes go
//! through [`atomic_write`] and a crash never leaves a truncated document.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
