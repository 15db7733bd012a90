//! Skills section.
//!
//! Skills are matched by exact, case-sensitive comparison after trimming.

use super::{Change, Confirmation, Outcome, Rejection, ResumeEditor, required};
use crate::error::Result;
use crate::events::EditAction;
use serde_json::json;

impl ResumeEditor {
    pub fn get_skills(&self) -> Result<Vec<String>> {
        Ok(self.store.load()?.skills)
    }

    /// Append a skill unless an identical one is already listed.
    pub fn add_skill(&self, skill: &str) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::AddSkill, |resume| {
            let skill = required("Skill", skill)?;
            if resume.skills.contains(&skill) {
                return Err(Rejection::DuplicateSkill(skill));
            }
            resume.skills.push(skill.clone());
            let details = json!({ "count": resume.skills.len() });
            Ok(Change::new(Confirmation::Saved)
                .target(skill)
                .details(details))
        })
    }

    /// Remove the skill that matches exactly.
    pub fn remove_skill(&self, skill: &str) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::RemoveSkill, |resume| {
            let skill = required("Skill", skill)?;
            let position = resume
                .skills
                .iter()
                .position(|s| *s == skill)
                .ok_or_else(|| Rejection::SkillNotFound(skill.clone()))?;
            resume.skills.remove(position);
            let details = json!({ "count": resume.skills.len() });
            Ok(Change::new(Confirmation::Saved)
                .target(skill)
                .details(details))
        })
    }
}
