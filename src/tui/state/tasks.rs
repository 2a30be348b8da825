use std::collections::HashSet;

use crate::model::{EntityId, ParentItem, Status, StatusChange};
use crate::outline::{
    CollapseStateStore, FlatNode, Grouping, OptimisticCoordinator, SectionedNavigator, Viewport,
};

pub const TASKS_CONTEXT: &str = "tasks";

/// One rendered line of the tasks view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRow {
    /// Section title, by section index
    Header(usize),
    /// Index into the navigator's concatenated rows
    Node(usize),
    /// Stands in for an empty section
    Placeholder(usize),
}

/// Controller for the grouped task list
#[derive(Debug, Clone)]
pub struct TaskViewState {
    pub collapse: CollapseStateStore,
    pub nav: SectionedNavigator,
    pub optimistic: OptimisticCoordinator<Status>,
    pub viewport: Viewport,
}

impl Default for TaskViewState {
    fn default() -> Self {
        TaskViewState {
            collapse: CollapseStateStore::with_context(TASKS_CONTEXT),
            nav: SectionedNavigator::new(),
            optimistic: OptimisticCoordinator::new(),
            viewport: Viewport::default(),
        }
    }
}

impl TaskViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from fresh authoritative tasks. Pending changes for tasks
    /// that no longer exist are dropped first.
    pub fn refresh(&mut self, tasks: &[ParentItem], grouping: &dyn Grouping) {
        let ids: HashSet<EntityId> = tasks.iter().map(|t| t.id.clone()).collect();
        let purged = self.optimistic.reconcile(&ids);
        if !purged.is_empty() {
            tracing::debug!(?purged, "dropped pending changes for vanished tasks");
        }
        self.nav.refresh(tasks, grouping, &self.collapse);
        self.follow();
    }

    pub fn move_down(&mut self) {
        self.nav.move_down();
        self.follow();
    }

    pub fn move_up(&mut self) {
        self.nav.move_up();
        self.follow();
    }

    /// On a parent row, flip its collapse flag; on a sub-note, collapse the
    /// owning task and land on it.
    pub fn toggle_collapse(&mut self) -> bool {
        let Some(node) = self.nav.selected_node().cloned() else {
            return false;
        };
        match node {
            FlatNode::Parent { id } => {
                if !self.nav.item(&id).is_some_and(|p| p.has_children()) {
                    return false;
                }
                self.collapse.toggle(id);
            }
            FlatNode::Child { parent, .. } => self.collapse.set_collapsed(parent, true),
        }
        self.nav.reproject(&self.collapse);
        self.follow();
        true
    }

    /// Flip the done state of the task under the cursor. Returns the change
    /// to persist, or `None` if there is no task or one is already in flight.
    pub fn toggle_done(&mut self) -> Option<StatusChange> {
        let item = self.nav.selected_item()?;
        let status = self.display_status(item)?.toggled();
        let id = item.id.clone();
        if !self.optimistic.begin_change(id.clone(), status) {
            return None;
        }
        Some(StatusChange { id, status })
    }

    pub fn confirm(&mut self, id: &EntityId) -> Option<Status> {
        self.optimistic.confirm(id)
    }

    pub fn revert(&mut self, id: &EntityId) -> Option<Status> {
        self.optimistic.revert(id)
    }

    /// Status to show for `item`, pending change applied
    pub fn display_status(&self, item: &ParentItem) -> Option<Status> {
        item.status
            .map(|status| self.optimistic.render_value(&item.id, status))
    }

    pub fn is_pending(&self, id: &EntityId) -> bool {
        self.optimistic.is_pending(id)
    }

    /// Every rendered line: each section's header followed by its rows, or
    /// a placeholder when it has none
    pub fn rows(&self) -> Vec<TaskRow> {
        let mut rows = Vec::new();
        for (i, section) in self.nav.sections().iter().enumerate() {
            rows.push(TaskRow::Header(i));
            if section.is_empty() {
                rows.push(TaskRow::Placeholder(i));
            } else {
                let start = section.start();
                rows.extend((start..start + section.len()).map(TaskRow::Node));
            }
        }
        rows
    }

    /// Rendered line the cursor sits on
    pub fn display_row(&self) -> Option<usize> {
        let selected = self.nav.selected_index()?;
        self.rows()
            .iter()
            .position(|r| *r == TaskRow::Node(selected))
    }

    pub fn set_height(&mut self, height: usize) {
        self.viewport.set_height(height);
        self.follow();
    }

    fn follow(&mut self) {
        match self.display_row() {
            Some(row) => self.viewport.follow(row),
            None => self.viewport.reset(),
        }
    }

    /// Restore persisted collapse flags, then re-project
    pub fn restore_collapsed<I: IntoIterator<Item = String>>(&mut self, ids: I) {
        for id in ids {
            self.collapse.set_collapsed(EntityId::new(id), true);
        }
        self.nav.reproject(&self.collapse);
        self.follow();
    }
}
