use std::collections::HashSet;
use std::hash::Hash;

use crate::model::{ContextKey, EntityId, ParentItem};

use super::project::{FlatNode, project};

/// Per-parent collapse flags scoped to a context key.
///
/// Everything is expanded by default. Switching to a different context
/// discards every flag at once.
#[derive(Debug, Clone)]
pub struct CollapseStateStore<K = EntityId> {
    collapsed: HashSet<K>,
    context: Option<ContextKey>,
}

impl<K: Eq + Hash> Default for CollapseStateStore<K> {
    fn default() -> Self {
        CollapseStateStore {
            collapsed: HashSet::new(),
            context: None,
        }
    }
}

impl<K: Eq + Hash + Clone> CollapseStateStore<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(key: impl Into<ContextKey>) -> Self {
        CollapseStateStore {
            collapsed: HashSet::new(),
            context: Some(key.into()),
        }
    }

    pub fn is_collapsed(&self, key: &K) -> bool {
        self.collapsed.contains(key)
    }

    pub fn toggle(&mut self, key: K) {
        if !self.collapsed.remove(&key) {
            self.collapsed.insert(key);
        }
    }

    pub fn set_collapsed(&mut self, key: K, collapsed: bool) {
        if collapsed {
            self.collapsed.insert(key);
        } else {
            self.collapsed.remove(&key);
        }
    }

    pub fn reset_all(&mut self) {
        self.collapsed.clear();
    }

    /// Adopt `key` as the active context. Any key other than the stored
    /// one (including none yet) resets every flag first; returns whether
    /// that happened.
    pub fn set_context(&mut self, key: impl Into<ContextKey>) -> bool {
        let key = key.into();
        if self.context.as_ref() == Some(&key) {
            return false;
        }
        self.reset_all();
        self.context = Some(key);
        true
    }

    pub fn context(&self) -> Option<&ContextKey> {
        self.context.as_ref()
    }

    pub fn collapsed(&self) -> impl Iterator<Item = &K> {
        self.collapsed.iter()
    }
}

impl CollapseStateStore<EntityId> {
    /// Project `parents` with this store's flags
    pub fn project(&self, parents: &[ParentItem]) -> Vec<FlatNode> {
        project(parents, |id| self.is_collapsed(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> EntityId {
        EntityId::from(s)
    }

    #[test]
    fn default_is_expanded() {
        let store: CollapseStateStore = CollapseStateStore::new();
        assert!(!store.is_collapsed(&id("P")));
    }

    #[test]
    fn toggle_flips() {
        let mut store: CollapseStateStore = CollapseStateStore::new();
        store.toggle(id("P"));
        assert!(store.is_collapsed(&id("P")));
        store.toggle(id("P"));
        assert!(!store.is_collapsed(&id("P")));
    }

    #[test]
    fn switching_context_resets_flags() {
        let mut store = CollapseStateStore::with_context("note1");
        store.set_collapsed(id("P"), true);
        store.set_collapsed(id("Q"), true);

        assert!(store.set_context("note2"));
        assert!(!store.is_collapsed(&id("P")));
        assert!(!store.is_collapsed(&id("Q")));
        assert_eq!(store.context().unwrap().as_str(), "note2");
    }

    #[test]
    fn same_context_keeps_flags() {
        let mut store = CollapseStateStore::with_context("note1");
        store.set_collapsed(id("P"), true);
        assert!(!store.set_context("note1"));
        assert!(store.is_collapsed(&id("P")));
    }

    #[test]
    fn first_context_counts_as_a_switch() {
        let mut store: CollapseStateStore = CollapseStateStore::new();
        store.set_collapsed(id("P"), true);
        assert!(store.set_context("tasks"));
        assert!(!store.is_collapsed(&id("P")));
        assert_eq!(store.context().unwrap().as_str(), "tasks");
    }

    #[test]
    fn reset_all_clears_everything() {
        let mut store: CollapseStateStore = CollapseStateStore::new();
        store.set_collapsed(id("P"), true);
        store.set_collapsed(id("Q"), true);
        store.reset_all();
        assert_eq!(store.collapsed().count(), 0);
    }
}
