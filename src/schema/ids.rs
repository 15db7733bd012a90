//! Entity identifiers.
//!
//! Ids are `<prefix>_<n>` with `n` a positive integer. New ids take the
//! highest existing suffix for the prefix plus one, so removing an entry
//! never frees its id while a higher one survives.

use super::Entity;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+)_([0-9]+)$").expect("id pattern is a valid regex")
});

/// The kinds of identified entities in a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Experience,
    Project,
    Education,
}

impl EntityKind {
    /// Id prefix for this kind (without the underscore).
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::Experience => "exp",
            EntityKind::Project => "proj",
            EntityKind::Education => "edu",
        }
    }

    /// Name of the resume field holding entities of this kind.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Experience => "experiences",
            EntityKind::Project => "projects",
            EntityKind::Education => "education",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Experience => write!(f, "Experience"),
            EntityKind::Project => write!(f, "Project"),
            EntityKind::Education => write!(f, "Education"),
        }
    }
}

/// Format an id for `kind` with numeric suffix `n`.
pub fn format_id(kind: EntityKind, n: u64) -> String {
    format!("{}_{}", kind.prefix(), n)
}

/// Return the numeric suffix of `id` if it is a well-formed id for `kind`.
///
/// Ids with another prefix, a non-numeric suffix, or a zero suffix yield `None`.
pub fn id_suffix(kind: EntityKind, id: &str) -> Option<u64> {
    let captures = ID_PATTERN.captures(id)?;
    if &captures[1] != kind.prefix() {
        return None;
    }
    captures[2].parse::<u64>().ok().filter(|n| *n > 0)
}

/// Generate the next id for a collection of entities.
pub fn next_id<E: Entity>(entities: &[E]) -> String {
    let highest = entities
        .iter()
        .filter_map(|entity| id_suffix(E::KIND, entity.id()))
        .max()
        .unwrap_or(0);
    format_id(E::KIND, highest.saturating_add(1))
}
