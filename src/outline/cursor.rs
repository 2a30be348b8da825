use crate::model::EntityId;

use super::project::FlatNode;

/// A single selection over a flat node list that follows its entity
/// across rebuilds.
#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    nodes: Vec<FlatNode>,
    selected: Option<usize>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[FlatNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Select `index`, clamped into range. No-op on an empty list.
    pub fn select(&mut self, index: usize) {
        if self.nodes.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(index.min(self.nodes.len() - 1));
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_node(&self) -> Option<&FlatNode> {
        self.selected.and_then(|i| self.nodes.get(i))
    }

    /// Move by `delta` rows, stopping at either end
    pub fn move_by(&mut self, delta: isize) {
        if let Some(cur) = self.selected {
            self.select(cur.saturating_add_signed(delta));
        }
    }

    pub fn select_first(&mut self) {
        self.select(0);
    }

    pub fn select_last(&mut self) {
        self.select(self.nodes.len().saturating_sub(1));
    }

    /// Select the parent (`parent == true`) or child node with this id.
    /// Returns false and leaves the selection alone if there is none.
    pub fn select_id(&mut self, id: &EntityId, parent: bool) -> bool {
        match self
            .nodes
            .iter()
            .position(|n| n.is_parent() == parent && n.id() == id)
        {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    /// Swap in a freshly projected list and re-resolve the selection:
    /// the same entity if it survived, else its parent if it was a child,
    /// else the old index clamped into the new list.
    pub fn rebuild(&mut self, nodes: Vec<FlatNode>) -> Option<usize> {
        let previous = self.selected_node().cloned();
        let previous_index = self.selected;
        self.nodes = nodes;

        if self.nodes.is_empty() {
            self.selected = None;
            return None;
        }

        let (Some(prev), Some(prev_index)) = (previous, previous_index) else {
            self.selected = Some(0);
            return self.selected;
        };

        if let Some(i) = self.nodes.iter().position(|n| n.same_entity(&prev)) {
            self.selected = Some(i);
        } else if let Some(parent) = prev.parent_id()
            && let Some(i) = self
                .nodes
                .iter()
                .position(|n| n.is_parent() && n.id() == parent)
        {
            self.selected = Some(i);
        } else {
            self.selected = Some(prev_index.min(self.nodes.len() - 1));
        }
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: &str) -> FlatNode {
        FlatNode::Parent {
            id: EntityId::from(id),
        }
    }

    fn c(id: &str, parent: &str) -> FlatNode {
        FlatNode::Child {
            id: EntityId::from(id),
            parent: EntityId::from(parent),
        }
    }

    fn tracker(nodes: Vec<FlatNode>) -> CursorTracker {
        let mut t = CursorTracker::new();
        t.rebuild(nodes);
        t
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut t = CursorTracker::new();
        assert_eq!(t.rebuild(vec![]), None);
        t.select(3);
        t.move_by(1);
        assert_eq!(t.selected_index(), None);
        assert!(t.selected_node().is_none());
    }

    #[test]
    fn first_rebuild_selects_top() {
        let t = tracker(vec![p("a"), p("b")]);
        assert_eq!(t.selected_index(), Some(0));
    }

    #[test]
    fn select_and_move_clamp() {
        let mut t = tracker(vec![p("a"), p("b"), p("c")]);
        t.select(10);
        assert_eq!(t.selected_index(), Some(2));
        t.move_by(1);
        assert_eq!(t.selected_index(), Some(2));
        t.move_by(-5);
        assert_eq!(t.selected_index(), Some(0));
    }

    #[test]
    fn follows_entity_when_siblings_reorder() {
        let mut t = tracker(vec![p("a"), p("b"), p("c")]);
        t.select(1);
        assert_eq!(t.rebuild(vec![p("c"), p("a"), p("b")]), Some(2));
        assert_eq!(t.selected_node().unwrap().id().as_str(), "b");
    }

    #[test]
    fn follows_child_when_it_moves() {
        let mut t = tracker(vec![p("a"), c("a.1", "a"), c("a.2", "a")]);
        t.select(2);
        t.rebuild(vec![p("z"), p("a"), c("a.2", "a"), c("a.1", "a")]);
        assert_eq!(t.selected_index(), Some(2));
    }

    #[test]
    fn hidden_child_falls_back_to_parent() {
        let mut t = tracker(vec![p("x"), p("a"), c("a.1", "a"), c("a.2", "a"), p("b")]);
        t.select(3);
        // a collapsed: its children are gone
        assert_eq!(t.rebuild(vec![p("x"), p("a"), p("b")]), Some(1));
        assert_eq!(t.selected_node(), Some(&p("a")));
    }

    #[test]
    fn deleted_item_clamps_previous_index() {
        let mut t = tracker(vec![p("a"), p("b"), p("c")]);
        t.select(2);
        assert_eq!(t.rebuild(vec![p("a"), p("b")]), Some(1));

        let mut t = tracker(vec![p("a"), p("b"), p("c")]);
        t.select(1);
        assert_eq!(t.rebuild(vec![p("a"), p("c")]), Some(1));
        assert_eq!(t.selected_node(), Some(&p("c")));
    }

    #[test]
    fn orphaned_child_without_parent_clamps() {
        let mut t = tracker(vec![p("a"), c("a.1", "a"), p("b"), p("c")]);
        t.select(1);
        assert_eq!(t.rebuild(vec![p("b"), p("c")]), Some(1));
    }

    #[test]
    fn emptied_list_clears_then_reselects() {
        let mut t = tracker(vec![p("a")]);
        assert_eq!(t.rebuild(vec![]), None);
        assert_eq!(t.rebuild(vec![p("b")]), Some(0));
    }

    #[test]
    fn parent_and_child_with_same_id_are_distinct() {
        let mut t = tracker(vec![p("a"), c("dup", "a"), p("dup")]);
        t.select(2);
        t.rebuild(vec![p("dup"), p("a"), c("dup", "a")]);
        assert_eq!(t.selected_index(), Some(0));
    }

    #[test]
    fn select_id_finds_by_kind() {
        let mut t = tracker(vec![p("a"), c("a.1", "a")]);
        assert!(t.select_id(&EntityId::from("a.1"), false));
        assert_eq!(t.selected_index(), Some(1));
        assert!(!t.select_id(&EntityId::from("a.1"), true));
        assert_eq!(t.selected_index(), Some(1));
    }
}
