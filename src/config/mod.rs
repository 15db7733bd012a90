//! Configuration model for resumeforge.
//!
//! This module defines the Config struct that represents `resumeforge.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{CONFIG_FILE_NAME, Config};
