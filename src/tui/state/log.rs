use crate::model::{EntityId, ParentItem};
use crate::outline::{CollapseStateStore, CursorTracker, FlatNode, Viewport};

pub const LOG_CONTEXT: &str = "log";

/// Controller for the work log: one flat collapsible list, no sections
#[derive(Debug, Clone)]
pub struct LogViewState {
    pub collapse: CollapseStateStore,
    pub cursor: CursorTracker,
    pub viewport: Viewport,
    entries: Vec<ParentItem>,
}

impl Default for LogViewState {
    fn default() -> Self {
        LogViewState {
            collapse: CollapseStateStore::with_context(LOG_CONTEXT),
            cursor: CursorTracker::new(),
            viewport: Viewport::default(),
            entries: Vec::new(),
        }
    }
}

impl LogViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self, entries: &[ParentItem]) {
        self.entries = entries.to_vec();
        self.reproject();
    }

    pub fn entries(&self) -> &[ParentItem] {
        &self.entries
    }

    pub fn entry(&self, id: &EntityId) -> Option<&ParentItem> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Clamped; never wraps
    pub fn move_by(&mut self, delta: isize) {
        self.cursor.move_by(delta);
        self.follow();
    }

    pub fn select_first(&mut self) {
        self.cursor.select_first();
        self.follow();
    }

    pub fn select_last(&mut self) {
        self.cursor.select_last();
        self.follow();
    }

    pub fn toggle_collapse(&mut self) -> bool {
        let Some(node) = self.cursor.selected_node().cloned() else {
            return false;
        };
        match node {
            FlatNode::Parent { id } => {
                if !self.entry(&id).is_some_and(|e| e.has_children()) {
                    return false;
                }
                self.collapse.toggle(id);
            }
            FlatNode::Child { parent, .. } => self.collapse.set_collapsed(parent, true),
        }
        self.reproject();
        true
    }

    pub fn set_height(&mut self, height: usize) {
        self.viewport.set_height(height);
        self.follow();
    }

    pub fn restore_collapsed<I: IntoIterator<Item = String>>(&mut self, ids: I) {
        for id in ids {
            self.collapse.set_collapsed(EntityId::new(id), true);
        }
        self.reproject();
    }

    fn reproject(&mut self) {
        self.cursor.rebuild(self.collapse.project(&self.entries));
        self.follow();
    }

    fn follow(&mut self) {
        match self.cursor.selected_index() {
            Some(row) => self.viewport.follow(row),
            None => self.viewport.reset(),
        }
    }
}
