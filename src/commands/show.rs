//! `resumeforge show` and `resumeforge section`.

use super::observe;
use crate::editor::{ResumeEditor, to_pretty_json};
use crate::error::Result;

/// The whole document as indented JSON.
pub fn cmd_show(editor: &ResumeEditor) -> Result<String> {
    to_pretty_json(&editor.get_resume()?)
}

/// One section as indented JSON. Unknown names are rejected.
pub fn cmd_section(editor: &ResumeEditor, name: &str) -> Result<String> {
    observe(editor.get_section(name)?)
}
