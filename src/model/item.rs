use serde::{Deserialize, Serialize};

use super::id::EntityId;

/// Task checkbox state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Done,
}

impl Status {
    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(self) -> char {
        match self {
            Status::Open => ' ',
            Status::Done => 'x',
        }
    }

    /// Parse a checkbox character into a status
    pub fn from_checkbox_char(c: char) -> Option<Status> {
        match c {
            ' ' => Some(Status::Open),
            'x' | 'X' => Some(Status::Done),
            _ => None,
        }
    }

    pub fn toggled(self) -> Status {
        match self {
            Status::Open => Status::Done,
            Status::Done => Status::Open,
        }
    }

    /// Done is terminal: done items drop out of every task section
    pub fn is_terminal(self) -> bool {
        self == Status::Done
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Open => write!(f, "open"),
            Status::Done => write!(f, "done"),
        }
    }
}

/// A sub-note under a task or log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildItem {
    pub id: EntityId,
    pub parent_id: EntityId,
    /// Stable ordering key (source line index)
    pub position: usize,
    pub text: String,
}

/// A task or log entry together with its sub-notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentItem {
    pub id: EntityId,
    /// Stable ordering key (source line index)
    pub position: usize,
    pub text: String,
    /// Checkbox state; `None` for items without one (log entries)
    pub status: Option<Status>,
    pub children: Vec<ChildItem>,
}

impl ParentItem {
    pub fn new(id: impl Into<EntityId>, position: usize, text: impl Into<String>) -> Self {
        ParentItem {
            id: id.into(),
            position,
            text: text.into(),
            status: None,
            children: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Append a sub-note. Its id is `<parent>.<n>` (1-based).
    pub fn push_child(&mut self, position: usize, text: impl Into<String>) -> &ChildItem {
        let n = self.children.len() + 1;
        self.children.push(ChildItem {
            id: EntityId::new(format!("{}.{}", self.id, n)),
            parent_id: self.id.clone(),
            position,
            text: text.into(),
        });
        &self.children[n - 1]
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child(&self, id: &EntityId) -> Option<&ChildItem> {
        self.children.iter().find(|c| &c.id == id)
    }
}

/// A requested status change, handed to the background worker and later
/// answered with a confirm or revert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub id: EntityId,
    pub status: Status,
}
