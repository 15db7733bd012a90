//! Workspace resolution for resumeforge.
//!
//! A workspace is a directory holding the resume document, an optional
//! `resumeforge.yaml`, and the edit history. Commands resolve the workspace
//! once, load the config, and derive every path from the pair, so no
//! operation reaches for the filesystem on its own.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{ResumeError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for a resumeforge workspace. All paths are absolute.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Directory that relative paths resolve against.
    pub root: PathBuf,

    /// Path to the config file (which may not exist).
    pub config_path: PathBuf,

    /// Explicit resume path, overriding `resume_file` from config.
    pub resume_override: Option<PathBuf>,
}

impl Workspace {
    /// Resolve the workspace from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ResumeError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(&cwd))
    }

    /// Resolve the workspace rooted at a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let config_path = root.join(CONFIG_FILE_NAME);

        Self {
            root,
            config_path,
            resume_override: None,
        }
    }

    /// Use a different config file. Relative paths resolve against the root.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = self.absolutize(path.as_ref());
        self
    }

    /// Use a specific resume document instead of the configured one.
    pub fn with_resume_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.resume_override = Some(self.absolutize(path.as_ref()));
        self
    }

    /// Load the workspace config, defaulting when no config file exists.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_or_default(&self.config_path)
    }

    /// Path to the resume document.
    pub fn resume_path(&self, config: &Config) -> PathBuf {
        match &self.resume_override {
            Some(path) => path.clone(),
            None => self.absolutize(Path::new(&config.resume_file)),
        }
    }

    /// Path to the edit history log.
    pub fn history_path(&self, config: &Config) -> PathBuf {
        self.absolutize(Path::new(&config.history_file))
    }

    fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_from_uses_default_layout() {
        let temp_dir = TempDir::new().unwrap();
        let ws = Workspace::resolve_from(temp_dir.path());
        let config = Config::default();

        assert_eq!(ws.root, temp_dir.path());
        assert_eq!(ws.config_path, temp_dir.path().join("resumeforge.yaml"));
        assert_eq!(ws.resume_path(&config), temp_dir.path().join("resume.json"));
        assert_eq!(
            ws.history_path(&config),
            temp_dir.path().join("resume.history.ndjson")
        );
    }

    #[test]
    fn test_config_paths_resolve_against_root() {
        let temp_dir = TempDir::new().unwrap();
        let ws = Workspace::resolve_from(temp_dir.path());
        let config = Config {
            resume_file: "data/cv.json".to_string(),
            ..Config::default()
        };

        assert_eq!(
            ws.resume_path(&config),
            temp_dir.path().join("data").join("cv.json")
        );
    }

    #[test]
    fn test_resume_override_wins_over_config() {
        let temp_dir = TempDir::new().unwrap();
        let elsewhere = temp_dir.path().join("elsewhere.json");
        let ws = Workspace::resolve_from(temp_dir.path()).with_resume_path(&elsewhere);

        assert_eq!(ws.resume_path(&Config::default()), elsewhere);
    }

    #[test]
    fn test_relative_config_override() {
        let temp_dir = TempDir::new().unwrap();
        let ws = Workspace::resolve_from(temp_dir.path()).with_config_path("conf/rf.yaml");

        assert_eq!(ws.config_path, temp_dir.path().join("conf").join("rf.yaml"));
    }

    #[test]
    fn test_load_config_reads_workspace_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("resumeforge.yaml"),
            "record_history: false\n",
        )
        .unwrap();

        let config = Workspace::resolve_from(temp_dir.path()).load_config().unwrap();
        assert!(!config.record_history);
    }

    #[test]
    #[serial]
    fn test_resolve_uses_current_directory() {
        let temp_dir = TempDir::new().unwrap();
        let canonical = temp_dir.path().canonicalize().unwrap();
        let _guard = DirGuard::new(&canonical);

        let ws = Workspace::resolve().unwrap();
        assert_eq!(ws.root.canonicalize().unwrap(), canonical);
    }
}
