use std::path::PathBuf;

use indexmap::IndexMap;

use super::config::Config;
use super::item::ParentItem;
use super::note::{Note, SkippedNote};
use crate::outline::validate::Rejection;

/// A fully loaded journal directory
#[derive(Debug, Clone)]
pub struct Journal {
    /// Root directory (parent of `daybook/`)
    pub root: PathBuf,
    /// Path to the `daybook/` directory
    pub dir: PathBuf,
    /// Parsed config.toml
    pub config: Config,
    /// Validated tasks in file order
    pub tasks: Vec<ParentItem>,
    /// Validated log entries in file order
    pub log: Vec<ParentItem>,
    /// Notes by slug, in file name order
    pub notes: IndexMap<String, Note>,
    /// Entries dropped by validation, per file
    pub rejected_tasks: Vec<Rejection>,
    pub rejected_log: Vec<Rejection>,
    /// Note files that could not be read or whose slug was taken
    pub skipped_notes: Vec<SkippedNote>,
}

impl Journal {
    pub fn task(&self, id: &str) -> Option<&ParentItem> {
        self.tasks.iter().find(|t| t.id.as_str() == id)
    }

    pub fn note(&self, slug: &str) -> Option<&Note> {
        self.notes.get(slug)
    }

    /// The note the notes view opens on: the configured home, else `index`,
    /// else the first note
    pub fn home_note(&self) -> Option<&str> {
        if let Some(home) = &self.config.notes.home
            && self.notes.contains_key(home)
        {
            return Some(home.as_str());
        }
        if self.notes.contains_key("index") {
            return Some("index");
        }
        self.notes.keys().next().map(|s| s.as_str())
    }
}
