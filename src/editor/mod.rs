//! Section-scoped editing of the resume document.
//!
//! [`ResumeEditor`] is the flat operation surface the orchestration layer
//! calls: one method per read or write, taking plain strings and indices.
//! Every write runs the same cycle:
//!
//! 1. load the whole document from the [`ResumeStore`]
//! 2. apply one mutation to the in-memory copy
//! 3. validate and save the whole document
//! 4. append an event to the history log, if one is configured
//!
//! A rejected mutation stops at step 2 and nothing is written. Expected
//! failures come back as [`Outcome::Rejected`]; only storage failures and
//! schema violations surface as [`ResumeError`](crate::error::ResumeError).
//!
//! The per-section operations live in sibling modules as `impl ResumeEditor`
//! blocks.

use crate::config::Config;
use crate::context::Workspace;
use crate::error::Result;
use crate::events::{EditAction, Event, HistoryLog};
use crate::schema::{Entity, Resume};
use crate::store::ResumeStore;
use serde_json::Value;

mod education;
mod experiences;
mod outcome;
mod projects;
mod section;
mod skills;
mod summary;


pub use outcome::{
    BULLET_PREVIEW_CHARS, Confirmation, Outcome, Rejection, bullet_preview, to_pretty_json,
};
pub use section::{SECTION_NAMES, Section};

/// Editor over a single resume document.
#[derive(Debug, Clone)]
pub struct ResumeEditor {
    store: ResumeStore,
    history: Option<HistoryLog>,
}

/// A mutation that went through, plus what to record about it.
struct Change<T> {
    value: T,
    target: Option<String>,
    details: Value,
}

impl<T> Change<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            target: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    fn details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }
}

impl ResumeEditor {
    /// Editor without history recording.
    pub fn new(store: ResumeStore) -> Self {
        Self {
            store,
            history: None,
        }
    }

    /// Record every applied edit to `log`.
    pub fn with_history(mut self, log: HistoryLog) -> Self {
        self.history = Some(log);
        self
    }

    /// Editor for a workspace, honoring the config's path, indentation and
    /// history settings.
    pub fn open(workspace: &Workspace, config: &Config) -> Self {
        let store =
            ResumeStore::new(workspace.resume_path(config)).with_indent(config.json_indent);
        let editor = Self::new(store);
        if config.record_history {
            editor.with_history(HistoryLog::new(workspace.history_path(config)))
        } else {
            editor
        }
    }

    pub fn store(&self) -> &ResumeStore {
        &self.store
    }

    pub fn history(&self) -> Option<&HistoryLog> {
        self.history.as_ref()
    }

    // ========================================================================
    // Whole-document reads
    // ========================================================================

    /// The complete current document.
    pub fn get_resume(&self) -> Result<Resume> {
        self.store.load()
    }

    /// JSON snapshot of one section.
    pub fn section(&self, section: Section) -> Result<Value> {
        section.snapshot(&self.store.load()?)
    }

    /// JSON snapshot of a section named at runtime.
    ///
    /// An unknown name is rejected before the document is read.
    pub fn get_section(&self, name: &str) -> Result<Outcome<Value>> {
        match name.parse::<Section>() {
            Ok(section) => self.section(section).map(Outcome::Done),
            Err(rejection) => Ok(Outcome::Rejected(rejection)),
        }
    }

    // ========================================================================
    // Write cycle
    // ========================================================================

    /// Load, mutate, validate, save, record.
    fn apply<T>(
        &self,
        action: EditAction,
        edit: impl FnOnce(&mut Resume) -> std::result::Result<Change<T>, Rejection>,
    ) -> Result<Outcome<T>> {
        let mut resume = self.store.load()?;

        let change = match edit(&mut resume) {
            Ok(change) => change,
            Err(rejection) => {
                tracing::debug!(%action, %rejection, "edit rejected");
                return Ok(Outcome::Rejected(rejection));
            }
        };

        self.store.save(&resume)?;
        tracing::info!(
            %action,
            target = change.target.as_deref().unwrap_or("-"),
            "edit applied"
        );
        self.record(action, &change);

        Ok(Outcome::Done(change.value))
    }

    /// Append to the history log. The document is already saved at this
    /// point, so a failing log write is reported but does not fail the edit.
    fn record<T>(&self, action: EditAction, change: &Change<T>) {
        let Some(log) = &self.history else {
            return;
        };

        let mut event = Event::new(action).with_details(change.details.clone());
        if let Some(target) = &change.target {
            event = event.with_target(target.clone());
        }

        if let Err(e) = log.append(&event) {
            tracing::warn!(%action, error = %e, "failed to record edit history");
        }
    }
}

/// Trim a required value, rejecting it when nothing is left.
fn required(field: &'static str, value: &str) -> std::result::Result<String, Rejection> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Rejection::EmptyField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trimmed replacement for an optional update argument.
///
/// Absent, empty and whitespace-only arguments mean "leave unchanged"; an
/// update can never clear a field.
fn replacement(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn not_found<E: Entity>(id: &str) -> Rejection {
    Rejection::NotFound {
        kind: E::KIND,
        id: id.to_string(),
    }
}

fn find<'a, E: Entity>(entities: &'a [E], id: &str) -> std::result::Result<&'a E, Rejection> {
    entities
        .iter()
        .find(|entity| entity.id() == id)
        .ok_or_else(|| not_found::<E>(id))
}

fn find_mut<'a, E: Entity>(
    entities: &'a mut [E],
    id: &str,
) -> std::result::Result<&'a mut E, Rejection> {
    entities
        .iter_mut()
        .find(|entity| entity.id() == id)
        .ok_or_else(|| not_found::<E>(id))
}

/// Remove the entity with `id`. Survivors keep their ids and order.
fn remove_by_id<E: Entity>(entities: &mut Vec<E>, id: &str) -> std::result::Result<E, Rejection> {
    let position = entities
        .iter()
        .position(|entity| entity.id() == id)
        .ok_or_else(|| not_found::<E>(id))?;
    Ok(entities.remove(position))
}
