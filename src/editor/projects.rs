//! Projects section. New projects are appended at the end.

use super::{
    Change, Confirmation, Outcome, ResumeEditor, find, find_mut, remove_by_id, replacement,
    required,
};
use crate::error::Result;
use crate::events::EditAction;
use crate::schema::{Entity, Project, next_id};
use serde_json::json;

impl ResumeEditor {
    pub fn get_projects(&self) -> Result<Vec<Project>> {
        Ok(self.store.load()?.projects)
    }

    pub fn get_project_by_id(&self, id: &str) -> Result<Outcome<Project>> {
        let resume = self.store.load()?;
        Ok(find(&resume.projects, id).cloned().into())
    }

    /// Create a project with a generated `proj_<n>` id, appended last.
    pub fn add_project(&self, name: &str, description: &str) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::AddProject, |resume| {
            let name = required("Project name", name)?;
            let description = required("Project description", description)?;

            let id = next_id(&resume.projects);
            let details = json!({ "name": name });
            resume
                .projects
                .push(Project::new(id.clone(), name, description));

            Ok(Change::new(Confirmation::Added {
                kind: Project::KIND,
                id: id.clone(),
            })
            .target(id)
            .details(details))
        })
    }

    /// Replace any non-empty subset of name and description.
    pub fn update_project(
        &self,
        id: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::UpdateProject, |resume| {
            let project = find_mut(&mut resume.projects, id)?;
            let mut changed = Vec::new();

            if let Some(name) = replacement(name) {
                project.name = name;
                changed.push("name");
            }
            if let Some(description) = replacement(description) {
                project.description = description;
                changed.push("description");
            }

            Ok(Change::new(Confirmation::Saved)
                .target(id)
                .details(json!({ "fields": changed })))
        })
    }

    pub fn remove_project(&self, id: &str) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::RemoveProject, |resume| {
            let removed = remove_by_id(&mut resume.projects, id)?;
            Ok(Change::new(Confirmation::Saved)
                .target(id)
                .details(json!({ "name": removed.name })))
        })
    }
}
