//! `resumeforge experience` and `resumeforge bullet`.

use super::{confirm, observe};
use crate::cli::{AddExperienceArgs, BulletAction, ExperienceAction, UpdateExperienceArgs};
use crate::editor::{ResumeEditor, to_pretty_json};
use crate::error::Result;

pub fn run(editor: &ResumeEditor, action: ExperienceAction) -> Result<String> {
    match action {
        ExperienceAction::List => to_pretty_json(&editor.get_experiences()?),
        ExperienceAction::Get(args) => observe(editor.get_experience_by_id(&args.id)?),
        ExperienceAction::Add(args) => cmd_add(editor, args),
        ExperienceAction::Update(args) => cmd_update(editor, args),
        ExperienceAction::Remove(args) => confirm(editor.remove_experience(&args.id)?),
    }
}

fn cmd_add(editor: &ResumeEditor, args: AddExperienceArgs) -> Result<String> {
    confirm(editor.add_experience(&args.company, &args.role, &args.dates, &args.bullets)?)
}

fn cmd_update(editor: &ResumeEditor, args: UpdateExperienceArgs) -> Result<String> {
    confirm(editor.update_experience(
        &args.id,
        args.company.as_deref(),
        args.role.as_deref(),
        args.dates.as_deref(),
    )?)
}

pub fn run_bullet(editor: &ResumeEditor, action: BulletAction) -> Result<String> {
    match action {
        BulletAction::Add {
            experience_id,
            text,
        } => confirm(editor.add_bullet(&experience_id, &text)?),
        BulletAction::Update {
            experience_id,
            index,
            text,
        } => confirm(editor.update_bullet(&experience_id, index, &text)?),
        BulletAction::Remove {
            experience_id,
            index,
        } => confirm(editor.remove_bullet(&experience_id, index)?),
    }
}
