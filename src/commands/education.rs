//! `resumeforge education`.

use super::{confirm, observe};
use crate::cli::EducationAction;
use crate::editor::{ResumeEditor, to_pretty_json};
use crate::error::Result;

pub fn run(editor: &ResumeEditor, action: EducationAction) -> Result<String> {
    match action {
        EducationAction::List => to_pretty_json(&editor.get_education()?),
        EducationAction::Get(args) => observe(editor.get_education_by_id(&args.id)?),
        EducationAction::Add {
            degree,
            institution,
            year,
        } => confirm(editor.add_education(&degree, &institution, &year)?),
        EducationAction::Update {
            id,
            degree,
            institution,
            year,
        } => confirm(editor.update_education(
            &id,
            degree.as_deref(),
            institution.as_deref(),
            year.as_deref(),
        )?),
        EducationAction::Remove(args) => confirm(editor.remove_education(&args.id)?),
    }
}
