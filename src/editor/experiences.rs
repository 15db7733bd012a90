//! Experiences section and the bullets nested in each experience.
//!
//! New experiences go to the front of the list (most recent first), unlike
//! projects and education which append.

use super::{
    Change, Confirmation, Outcome, Rejection, ResumeEditor, find, find_mut, remove_by_id,
    replacement, required,
};
use crate::error::Result;
use crate::events::EditAction;
use crate::schema::{Entity, Experience, next_id};
use serde_json::json;

impl ResumeEditor {
    pub fn get_experiences(&self) -> Result<Vec<Experience>> {
        Ok(self.store.load()?.experiences)
    }

    pub fn get_experience_by_id(&self, id: &str) -> Result<Outcome<Experience>> {
        let resume = self.store.load()?;
        Ok(find(&resume.experiences, id).cloned().into())
    }

    /// Create an experience with a generated `exp_<n>` id, inserted first.
    pub fn add_experience(
        &self,
        company: &str,
        role: &str,
        dates: &str,
        bullets: &[String],
    ) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::AddExperience, |resume| {
            let company = required("Company", company)?;
            let role = required("Role", role)?;
            let dates = required("Dates", dates)?;
            let bullets = bullets
                .iter()
                .map(|bullet| required("Bullet text", bullet))
                .collect::<std::result::Result<Vec<_>, _>>()?;

            let id = next_id(&resume.experiences);
            let details = json!({
                "company": company,
                "role": role,
                "bullets": bullets.len(),
            });
            resume.experiences.insert(
                0,
                Experience::new(id.clone(), company, role, dates, bullets),
            );

            Ok(Change::new(Confirmation::Added {
                kind: Experience::KIND,
                id: id.clone(),
            })
            .target(id)
            .details(details))
        })
    }

    /// Replace any non-empty subset of company, role and dates.
    pub fn update_experience(
        &self,
        id: &str,
        company: Option<&str>,
        role: Option<&str>,
        dates: Option<&str>,
    ) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::UpdateExperience, |resume| {
            let experience = find_mut(&mut resume.experiences, id)?;
            let mut changed = Vec::new();

            if let Some(company) = replacement(company) {
                experience.company = company;
                changed.push("company");
            }
            if let Some(role) = replacement(role) {
                experience.role = role;
                changed.push("role");
            }
            if let Some(dates) = replacement(dates) {
                experience.dates = dates;
                changed.push("dates");
            }

            Ok(Change::new(Confirmation::Saved)
                .target(id)
                .details(json!({ "fields": changed })))
        })
    }

    pub fn remove_experience(&self, id: &str) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::RemoveExperience, |resume| {
            let removed = remove_by_id(&mut resume.experiences, id)?;
            Ok(Change::new(Confirmation::Saved)
                .target(id)
                .details(json!({ "company": removed.company })))
        })
    }

    // ========================================================================
    // Bullets
    // ========================================================================

    /// Append a bullet to an experience.
    pub fn add_bullet(&self, experience_id: &str, text: &str) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::AddBullet, |resume| {
            let text = required("Bullet text", text)?;
            let experience = find_mut(&mut resume.experiences, experience_id)?;
            experience.bullets.push(text);
            let index = experience.bullets.len() - 1;

            Ok(Change::new(Confirmation::Saved)
                .target(experience_id)
                .details(json!({ "index": index })))
        })
    }

    /// Replace the bullet at a 0-based index.
    pub fn update_bullet(
        &self,
        experience_id: &str,
        index: usize,
        text: &str,
    ) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::UpdateBullet, |resume| {
            let text = required("Bullet text", text)?;
            let experience = find_mut(&mut resume.experiences, experience_id)?;
            let count = experience.bullets.len();
            let bullet = experience
                .bullets
                .get_mut(index)
                .ok_or(Rejection::BulletOutOfRange { index, count })?;
            *bullet = text;

            Ok(Change::new(Confirmation::Saved)
                .target(experience_id)
                .details(json!({ "index": index })))
        })
    }

    /// Remove the bullet at a 0-based index, echoing back its text.
    pub fn remove_bullet(&self, experience_id: &str, index: usize) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::RemoveBullet, |resume| {
            let experience = find_mut(&mut resume.experiences, experience_id)?;
            let count = experience.bullets.len();
            if index >= count {
                return Err(Rejection::BulletOutOfRange { index, count });
            }
            let removed = experience.bullets.remove(index);

            Ok(Change::new(Confirmation::BulletRemoved(removed))
                .target(experience_id)
                .details(json!({ "index": index })))
        })
    }
}
