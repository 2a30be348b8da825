use std::collections::{HashMap, HashSet};

use crate::model::EntityId;

/// Locally applied values shown in place of authoritative data while a
/// mutation is in flight.
///
/// An entry exists from `begin_change` until exactly one `confirm` or
/// `revert` (or until its entity disappears upstream). Entries never expire
/// on their own, even once the authoritative value matches.
#[derive(Debug, Clone)]
pub struct OptimisticCoordinator<V> {
    pending: HashMap<EntityId, V>,
}

impl<V> Default for OptimisticCoordinator<V> {
    fn default() -> Self {
        OptimisticCoordinator {
            pending: HashMap::new(),
        }
    }
}

impl<V: Clone> OptimisticCoordinator<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `value` on `id`. Refused (returns false, nothing changes)
    /// while an earlier change for the same id is still pending.
    pub fn begin_change(&mut self, id: EntityId, value: V) -> bool {
        if self.pending.contains_key(&id) {
            tracing::debug!(%id, "change already in flight, ignoring");
            return false;
        }
        self.pending.insert(id, value);
        true
    }

    /// The value to display for `id`
    pub fn render_value(&self, id: &EntityId, authoritative: V) -> V {
        match self.pending.get(id) {
            Some(v) => v.clone(),
            None => authoritative,
        }
    }

    pub fn pending_value(&self, id: &EntityId) -> Option<&V> {
        self.pending.get(id)
    }

    pub fn is_pending(&self, id: &EntityId) -> bool {
        self.pending.contains_key(id)
    }

    /// The mutation succeeded; drop the overlay
    pub fn confirm(&mut self, id: &EntityId) -> Option<V> {
        self.pending.remove(id)
    }

    /// The mutation failed; drop the overlay
    pub fn revert(&mut self, id: &EntityId) -> Option<V> {
        self.pending.remove(id)
    }

    /// Purge entries whose entity is gone from `current`. Returns the
    /// purged ids, sorted.
    pub fn reconcile(&mut self, current: &HashSet<EntityId>) -> Vec<EntityId> {
        let mut purged: Vec<EntityId> = self
            .pending
            .keys()
            .filter(|id| !current.contains(*id))
            .cloned()
            .collect();
        purged.sort();
        for id in &purged {
            self.pending.remove(id);
        }
        purged
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn id(s: &str) -> EntityId {
        EntityId::from(s)
    }

    #[test]
    fn overlay_shows_pending_value() {
        let mut opt = OptimisticCoordinator::new();
        assert!(opt.begin_change(id("t1"), Status::Done));
        assert_eq!(opt.render_value(&id("t1"), Status::Open), Status::Done);
        assert_eq!(opt.render_value(&id("t1"), Status::Done), Status::Done);
        assert_eq!(opt.render_value(&id("t2"), Status::Open), Status::Open);
    }

    #[test]
    fn confirm_and_revert_clear_the_overlay() {
        let mut opt = OptimisticCoordinator::new();
        opt.begin_change(id("t1"), Status::Done);
        assert_eq!(opt.confirm(&id("t1")), Some(Status::Done));
        assert_eq!(opt.render_value(&id("t1"), Status::Open), Status::Open);

        opt.begin_change(id("t1"), Status::Done);
        assert_eq!(opt.revert(&id("t1")), Some(Status::Done));
        assert_eq!(opt.render_value(&id("t1"), Status::Open), Status::Open);
        assert!(opt.is_empty());
    }

    #[test]
    fn second_begin_is_refused() {
        let mut opt = OptimisticCoordinator::new();
        assert!(opt.begin_change(id("t1"), Status::Done));
        assert!(!opt.begin_change(id("t1"), Status::Open));
        assert_eq!(opt.pending_value(&id("t1")), Some(&Status::Done));
        assert_eq!(opt.len(), 1);
    }

    #[test]
    fn overlay_survives_matching_authoritative_value() {
        let mut opt = OptimisticCoordinator::new();
        opt.begin_change(id("t1"), Status::Done);
        let current: HashSet<EntityId> = [id("t1")].into_iter().collect();
        assert!(opt.reconcile(&current).is_empty());
        assert!(opt.is_pending(&id("t1")));
    }

    #[test]
    fn reconcile_purges_vanished_entities() {
        let mut opt = OptimisticCoordinator::new();
        opt.begin_change(id("t1"), Status::Done);
        opt.begin_change(id("t2"), Status::Done);
        opt.begin_change(id("t3"), Status::Open);
        let current: HashSet<EntityId> = [id("t2")].into_iter().collect();
        assert_eq!(opt.reconcile(&current), vec![id("t1"), id("t3")]);
        assert!(opt.is_pending(&id("t2")));
        assert_eq!(opt.len(), 1);
    }

    #[test]
    fn confirm_without_entry_is_harmless() {
        let mut opt: OptimisticCoordinator<Status> = OptimisticCoordinator::new();
        assert_eq!(opt.confirm(&id("nope")), None);
        assert_eq!(opt.revert(&id("nope")), None);
    }
}
