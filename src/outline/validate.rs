use std::collections::HashSet;
use std::fmt;

use crate::model::{EntityId, ParentItem};

/// Why an entity was dropped before projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    EmptyId,
    DuplicateId,
    /// A child whose `parent_id` names a different parent than the one holding it
    ParentMismatch,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::EmptyId => write!(f, "empty id"),
            RejectReason::DuplicateId => write!(f, "duplicate id"),
            RejectReason::ParentMismatch => write!(f, "parent mismatch"),
        }
    }
}

/// One dropped entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub id: EntityId,
    /// Set when the rejected entity is a child
    pub parent: Option<EntityId>,
    /// Ordering key of the rejected entity
    pub position: usize,
    pub reason: RejectReason,
}

/// Result of the validation pass: a clean entity set plus everything dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validated {
    pub parents: Vec<ParentItem>,
    pub rejected: Vec<Rejection>,
}

/// Drop malformed parents and children. The first occurrence of a
/// duplicated id wins. Dropping a parent drops its children with it.
pub fn validate(parents: Vec<ParentItem>) -> Validated {
    let mut out = Validated::default();
    let mut seen_parents: HashSet<EntityId> = HashSet::new();
    let mut seen_children: HashSet<EntityId> = HashSet::new();

    for mut parent in parents {
        let reason = if parent.id.is_empty() {
            Some(RejectReason::EmptyId)
        } else if seen_parents.contains(&parent.id) {
            Some(RejectReason::DuplicateId)
        } else {
            None
        };
        if let Some(reason) = reason {
            out.rejected.push(Rejection {
                id: parent.id,
                parent: None,
                position: parent.position,
                reason,
            });
            continue;
        }
        seen_parents.insert(parent.id.clone());

        let children = std::mem::take(&mut parent.children);
        for child in children {
            let reason = if child.id.is_empty() {
                Some(RejectReason::EmptyId)
            } else if child.parent_id != parent.id {
                Some(RejectReason::ParentMismatch)
            } else if seen_children.contains(&child.id) {
                Some(RejectReason::DuplicateId)
            } else {
                None
            };
            match reason {
                Some(reason) => out.rejected.push(Rejection {
                    id: child.id,
                    parent: Some(parent.id.clone()),
                    position: child.position,
                    reason,
                }),
                None => {
                    seen_children.insert(child.id.clone());
                    parent.children.push(child);
                }
            }
        }
        out.parents.push(parent);
    }
    out
}
