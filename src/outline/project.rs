use crate::model::{EntityId, ParentItem};

use super::collapse::CollapseStateStore;

/// One row of a flattened parent/child list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlatNode {
    Parent { id: EntityId },
    Child { id: EntityId, parent: EntityId },
}

impl FlatNode {
    pub fn id(&self) -> &EntityId {
        match self {
            FlatNode::Parent { id } | FlatNode::Child { id, .. } => id,
        }
    }

    /// The parent of a child node
    pub fn parent_id(&self) -> Option<&EntityId> {
        match self {
            FlatNode::Parent { .. } => None,
            FlatNode::Child { parent, .. } => Some(parent),
        }
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, FlatNode::Parent { .. })
    }

    /// Same entity: same kind and same id
    pub fn same_entity(&self, other: &FlatNode) -> bool {
        self.is_parent() == other.is_parent() && self.id() == other.id()
    }
}

/// Flatten parents and their children into render order.
///
/// A parent's children follow it unless `is_collapsed` says otherwise; a
/// childless parent is unaffected by its flag. Entities with an empty id are
/// skipped.
pub fn project<F>(parents: &[ParentItem], is_collapsed: F) -> Vec<FlatNode>
where
    F: Fn(&EntityId) -> bool,
{
    let mut nodes = Vec::with_capacity(parents.len());
    for parent in parents {
        if parent.id.is_empty() {
            continue;
        }
        nodes.push(FlatNode::Parent {
            id: parent.id.clone(),
        });
        if !parent.has_children() || is_collapsed(&parent.id) {
            continue;
        }
        for child in &parent.children {
            if child.id.is_empty() {
                continue;
            }
            nodes.push(FlatNode::Child {
                id: child.id.clone(),
                parent: parent.id.clone(),
            });
        }
    }
    nodes
}

/// Flip a parent's collapse flag. Unknown and childless parents are left
/// alone; returns whether anything changed.
pub fn toggle_parent(
    store: &mut CollapseStateStore,
    parents: &[ParentItem],
    id: &EntityId,
) -> bool {
    match find_parent(parents, id) {
        Some(parent) if parent.has_children() => {
            store.toggle(id.clone());
            true
        }
        _ => false,
    }
}

pub fn find_parent<'a>(parents: &'a [ParentItem], id: &EntityId) -> Option<&'a ParentItem> {
    parents.iter().find(|p| &p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parent(id: &str, children: &[&str]) -> ParentItem {
        let mut p = ParentItem::new(id, 0, id);
        for (i, text) in children.iter().enumerate() {
            p.push_child(i + 1, *text);
        }
        p
    }

    fn ids(nodes: &[FlatNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id().as_str()).collect()
    }

    #[test]
    fn expanded_parent_emits_children_in_order() {
        let parents = vec![parent("task", &["a", "b"])];
        let nodes = project(&parents, |_| false);
        assert_eq!(ids(&nodes), vec!["task", "task.1", "task.2"]);
        assert_eq!(
            nodes[1],
            FlatNode::Child {
                id: EntityId::from("task.1"),
                parent: EntityId::from("task"),
            }
        );
    }

    #[test]
    fn collapse_toggle_round_trips() {
        let parents = vec![parent("task", &["a", "b"]), parent("other", &[])];
        let mut store: CollapseStateStore = CollapseStateStore::new();
        let expanded = store.project(&parents);
        assert_eq!(expanded.len(), 4);

        assert!(toggle_parent(&mut store, &parents, &EntityId::from("task")));
        let collapsed = store.project(&parents);
        assert_eq!(ids(&collapsed), vec!["task", "other"]);

        toggle_parent(&mut store, &parents, &EntityId::from("task"));
        assert_eq!(store.project(&parents), expanded);
    }

    #[test]
    fn childless_and_unknown_parents_ignore_toggle() {
        let parents = vec![parent("solo", &[])];
        let mut store: CollapseStateStore = CollapseStateStore::new();
        assert!(!toggle_parent(&mut store, &parents, &EntityId::from("solo")));
        assert!(!toggle_parent(&mut store, &parents, &EntityId::from("ghost")));
        assert!(!store.is_collapsed(&EntityId::from("solo")));

        // A stray flag on a childless parent changes nothing either
        store.set_collapsed(EntityId::from("solo"), true);
        assert_eq!(ids(&store.project(&parents)), vec!["solo"]);
    }

    #[test]
    fn projection_is_deterministic() {
        let parents = vec![parent("a", &["x", "y"]), parent("b", &["z"])];
        let mut store: CollapseStateStore = CollapseStateStore::new();
        store.set_collapsed(EntityId::from("b"), true);
        assert_eq!(store.project(&parents), store.project(&parents));
    }

    #[test]
    fn empty_ids_are_skipped() {
        let mut p = parent("a", &["x"]);
        p.children[0].id = EntityId::from("");
        let parents = vec![ParentItem::new("", 0, "blank"), p];
        assert_eq!(ids(&project(&parents, |_| false)), vec!["a"]);
    }

    #[test]
    fn empty_input_projects_to_nothing() {
        assert!(project(&[], |_| false).is_empty());
    }
}
