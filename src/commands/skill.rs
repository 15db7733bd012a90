//! `resumeforge skill`.

use super::confirm;
use crate::cli::SkillAction;
use crate::editor::{ResumeEditor, to_pretty_json};
use crate::error::Result;

pub fn run(editor: &ResumeEditor, action: SkillAction) -> Result<String> {
    match action {
        SkillAction::List => to_pretty_json(&editor.get_skills()?),
        SkillAction::Add { skill } => confirm(editor.add_skill(&skill)?),
        SkillAction::Remove { skill } => confirm(editor.remove_skill(&skill)?),
    }
}
