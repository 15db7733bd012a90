//! `resumeforge project`.

use super::{confirm, observe};
use crate::cli::ProjectAction;
use crate::editor::{ResumeEditor, to_pretty_json};
use crate::error::Result;

pub fn run(editor: &ResumeEditor, action: ProjectAction) -> Result<String> {
    match action {
        ProjectAction::List => to_pretty_json(&editor.get_projects()?),
        ProjectAction::Get(args) => observe(editor.get_project_by_id(&args.id)?),
        ProjectAction::Add { name, description } => {
            confirm(editor.add_project(&name, &description)?)
        }
        ProjectAction::Update {
            id,
            name,
            description,
        } => confirm(editor.update_project(&id, name.as_deref(), description.as_deref())?),
        ProjectAction::Remove(args) => confirm(editor.remove_project(&args.id)?),
    }
}
