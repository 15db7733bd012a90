//! Education section. New entries are appended at the end.

use super::{
    Change, Confirmation, Outcome, ResumeEditor, find, find_mut, remove_by_id, replacement,
    required,
};
use crate::error::Result;
use crate::events::EditAction;
use crate::schema::{Education, Entity, next_id};
use serde_json::json;

impl ResumeEditor {
    pub fn get_education(&self) -> Result<Vec<Education>> {
        Ok(self.store.load()?.education)
    }

    pub fn get_education_by_id(&self, id: &str) -> Result<Outcome<Education>> {
        let resume = self.store.load()?;
        Ok(find(&resume.education, id).cloned().into())
    }

    /// Create an education entry with a generated `edu_<n>` id, appended last.
    pub fn add_education(
        &self,
        degree: &str,
        institution: &str,
        year: &str,
    ) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::AddEducation, |resume| {
            let degree = required("Degree", degree)?;
            let institution = required("Institution", institution)?;
            let year = required("Year", year)?;

            let id = next_id(&resume.education);
            let details = json!({ "degree": degree, "institution": institution });
            resume
                .education
                .push(Education::new(id.clone(), degree, institution, year));

            Ok(Change::new(Confirmation::Added {
                kind: Education::KIND,
                id: id.clone(),
            })
            .target(id)
            .details(details))
        })
    }

    /// Replace any non-empty subset of degree, institution and year.
    pub fn update_education(
        &self,
        id: &str,
        degree: Option<&str>,
        institution: Option<&str>,
        year: Option<&str>,
    ) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::UpdateEducation, |resume| {
            let entry = find_mut(&mut resume.education, id)?;
            let mut changed = Vec::new();

            if let Some(degree) = replacement(degree) {
                entry.degree = degree;
                changed.push("degree");
            }
            if let Some(institution) = replacement(institution) {
                entry.institution = institution;
                changed.push("institution");
            }
            if let Some(year) = replacement(year) {
                entry.year = year;
                changed.push("year");
            }

            Ok(Change::new(Confirmation::Saved)
                .target(id)
                .details(json!({ "fields": changed })))
        })
    }

    pub fn remove_education(&self, id: &str) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::RemoveEducation, |resume| {
            let removed = remove_by_id(&mut resume.education, id)?;
            Ok(Change::new(Confirmation::Saved)
                .target(id)
                .details(json!({ "degree": removed.degree })))
        })
    }
}
