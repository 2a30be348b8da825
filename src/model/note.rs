use std::path::PathBuf;

use super::id::EntityId;

/// A link as written inside a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLink {
    /// Slug of the linked note
    pub target: String,
    /// Trimmed source line containing the link
    pub line: String,
}

/// A parsed note file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// File stem, used for `[[slug]]` links
    pub slug: String,
    /// From an `id:` line, else the slug
    pub id: EntityId,
    /// From the first `# ` heading, else the slug
    pub title: String,
    /// Outgoing links in order, one per target
    pub links: Vec<NoteLink>,
    pub path: Option<PathBuf>,
}

/// A file under `notes/` that was left out of the journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNote {
    /// File name inside `notes/`
    pub file: String,
    pub reason: String,
}
