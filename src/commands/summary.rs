//! `resumeforge summary`.

use super::confirm;
use crate::cli::SummaryAction;
use crate::editor::ResumeEditor;
use crate::error::Result;

pub fn run(editor: &ResumeEditor, action: SummaryAction) -> Result<String> {
    match action {
        // Plain text; `section summary` gives the JSON form.
        SummaryAction::Get => editor.get_summary(),
        SummaryAction::Set { text } => confirm(editor.update_summary(&text)?),
    }
}
