use crate::editor::ResumeEditor;
use crate::schema::{Education, Experience, Project, Resume};
use crate::store::ResumeStore;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A small but fully populated resume.
///
/// Experience ids are deliberately non-contiguous (`exp_3`, `exp_1`) so id
/// generation tests see a gap.
pub(crate) fn sample_resume() -> Resume {
    let mut resume = Resume::new("Backend engineer focused on data-heavy services.");
    resume.experiences = vec![
        Experience::new(
            "exp_3",
            "Globex",
            "Senior Engineer",
            "2022 - Present",
            vec![
                "Led migration of billing pipeline".to_string(),
                "Cut p99 latency by 40%".to_string(),
                "Mentored four engineers".to_string(),
            ],
        ),
        Experience::new("exp_1", "Initech", "Engineer", "2018 - 2022", vec![]),
    ];
    resume.skills = vec!["Rust".to_string(), "PostgreSQL".to_string()];
    resume.projects = vec![Project::new(
        "proj_1",
        "ledger",
        "Double-entry accounting library",
    )];
    resume.education = vec![Education::new(
        "edu_1",
        "BSc Computer Science",
        "State University",
        "2018",
    )];
    resume
}

/// Write `resume` into a fresh temp dir as `resume.json`.
pub(crate) fn write_resume(resume: &Resume) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("resume.json");
    let text = serde_json::to_string_pretty(resume).unwrap();
    std::fs::write(&path, text).unwrap();
    (temp_dir, path)
}

/// An editor over a temp copy of [`sample_resume`], without history.
pub(crate) fn sample_editor() -> (TempDir, ResumeEditor) {
    let (temp_dir, path) = write_resume(&sample_resume());
    (temp_dir, ResumeEditor::new(ResumeStore::new(path)))
}

/// Read the document back from disk, bypassing the store.
pub(crate) fn read_back(path: &Path) -> Resume {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}
