use serde::{Deserialize, Serialize};

use super::id::EntityId;

/// Identity of a note as a navigation target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteRef {
    pub slug: String,
    pub id: EntityId,
}

impl NoteRef {
    pub fn new(slug: impl Into<String>, id: impl Into<EntityId>) -> Self {
        NoteRef {
            slug: slug.into(),
            id: id.into(),
        }
    }
}

/// One `[[wikilink]]` from `source` to `target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub source: NoteRef,
    pub target: NoteRef,
    /// The source line the link appears on
    pub context: String,
    /// Whether the target note exists
    pub resolved: bool,
}

/// The link graph around one note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteLinks {
    /// Links written in the note, in order
    pub outgoing: Vec<LinkRecord>,
    /// Links from other notes pointing at this one
    pub backlinks: Vec<LinkRecord>,
}
