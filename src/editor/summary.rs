//! Summary section.

use super::{Change, Confirmation, Outcome, ResumeEditor, required};
use crate::error::Result;
use crate::events::EditAction;
use serde_json::json;

impl ResumeEditor {
    /// The current summary text.
    pub fn get_summary(&self) -> Result<String> {
        Ok(self.store.load()?.summary)
    }

    /// Replace the summary. Empty or whitespace-only text is rejected.
    pub fn update_summary(&self, text: &str) -> Result<Outcome<Confirmation>> {
        self.apply(EditAction::UpdateSummary, |resume| {
            let summary = required("Summary", text)?;
            let details = json!({ "chars": summary.chars().count() });
            resume.summary = summary;
            Ok(Change::new(Confirmation::Saved).details(details))
        })
    }
}
