use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a task, log entry, sub-note or note.
///
/// Parents, children, optimistic entries and collapse flags are all keyed
/// by this one type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty identity marks a malformed entity
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// A line-number key given to an entry written without an id
    pub fn is_positional(&self) -> bool {
        self.0.starts_with("_L")
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId(s)
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The scope collapse state is tied to (a view name, or the slug of the
/// note being viewed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextKey(String);

impl ContextKey {
    pub fn new(key: impl Into<String>) -> Self {
        ContextKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContextKey {
    fn from(s: &str) -> Self {
        ContextKey(s.to_string())
    }
}

impl From<String> for ContextKey {
    fn from(s: String) -> Self {
        ContextKey(s)
    }
}
