use crate::model::{EntityId, ParentItem};

use super::collapse::CollapseStateStore;
use super::cursor::CursorTracker;
use super::project::FlatNode;

/// A named group of parents, e.g. "Today"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub items: Vec<ParentItem>,
}

impl Section {
    pub fn new(name: impl Into<String>, items: Vec<ParentItem>) -> Self {
        Section {
            name: name.into(),
            items,
        }
    }
}

/// Splits parents into ordered sections. Implementations decide which
/// items are left out entirely (e.g. done tasks).
pub trait Grouping {
    fn group(&self, parents: &[ParentItem]) -> Vec<Section>;
}

impl<F> Grouping for F
where
    F: Fn(&[ParentItem]) -> Vec<Section>,
{
    fn group(&self, parents: &[ParentItem]) -> Vec<Section> {
        self(parents)
    }
}

/// A section together with its projected rows
#[derive(Debug, Clone)]
pub struct SectionView {
    pub name: String,
    pub items: Vec<ParentItem>,
    pub nodes: Vec<FlatNode>,
    /// Index of this section's first row in the concatenated list
    start: usize,
}

impl SectionView {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    fn contains(&self, global: usize) -> bool {
        global >= self.start && global < self.start + self.nodes.len()
    }
}

/// Cursor position relative to a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPos {
    pub section: usize,
    pub index: usize,
}

/// Section-aware movement over grouped, collapsible lists.
///
/// One `CursorTracker` spans the concatenation of every section so the
/// selection follows its entity across refreshes, even between sections.
/// Moving past either end of a section continues in the next non-empty
/// section, wrapping around at the ends.
#[derive(Debug, Clone, Default)]
pub struct SectionedNavigator {
    sections: Vec<SectionView>,
    cursor: CursorTracker,
}

impl SectionedNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `parents` and rebuild
    pub fn refresh(
        &mut self,
        parents: &[ParentItem],
        grouping: &dyn Grouping,
        collapse: &CollapseStateStore,
    ) -> Option<usize> {
        self.rebuild(grouping.group(parents), collapse)
    }

    /// Replace the sections, project each one and re-resolve the selection
    pub fn rebuild(
        &mut self,
        sections: Vec<Section>,
        collapse: &CollapseStateStore,
    ) -> Option<usize> {
        let mut start = 0;
        let mut all = Vec::new();
        self.sections = sections
            .into_iter()
            .map(|s| {
                let nodes = collapse.project(&s.items);
                let view = SectionView {
                    name: s.name,
                    items: s.items,
                    nodes,
                    start,
                };
                start += view.nodes.len();
                all.extend(view.nodes.iter().cloned());
                view
            })
            .collect();
        self.cursor.rebuild(all)
    }

    /// Re-project the current sections after a collapse flag changed
    pub fn reproject(&mut self, collapse: &CollapseStateStore) -> Option<usize> {
        let sections = std::mem::take(&mut self.sections)
            .into_iter()
            .map(|v| Section::new(v.name, v.items))
            .collect();
        self.rebuild(sections, collapse)
    }

    pub fn sections(&self) -> &[SectionView] {
        &self.sections
    }

    /// All rows, section after section
    pub fn nodes(&self) -> &[FlatNode] {
        self.cursor.nodes()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.cursor.selected_index()
    }

    pub fn selected_node(&self) -> Option<&FlatNode> {
        self.cursor.selected_node()
    }

    pub fn selected_position(&self) -> Option<SectionPos> {
        let global = self.cursor.selected_index()?;
        let section = self.section_at(global)?;
        Some(SectionPos {
            section,
            index: global - self.sections[section].start,
        })
    }

    /// The parent item under the cursor (the owning parent for a child row)
    pub fn selected_item(&self) -> Option<&ParentItem> {
        let node = self.selected_node()?;
        let parent_id = node.parent_id().unwrap_or(node.id());
        self.item(parent_id)
    }

    pub fn item(&self, id: &EntityId) -> Option<&ParentItem> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|p| &p.id == id)
    }

    /// Select a row by section-relative position (clamped)
    pub fn select_position(&mut self, section: usize, index: usize) {
        if let Some(s) = self.sections.get(section)
            && !s.is_empty()
        {
            self.cursor.select(s.start + index.min(s.len() - 1));
        }
    }

    pub fn select_id(&mut self, id: &EntityId, parent: bool) -> bool {
        self.cursor.select_id(id, parent)
    }

    pub fn move_down(&mut self) {
        let Some(global) = self.cursor.selected_index() else {
            return;
        };
        let Some(current) = self.section_at(global) else {
            return;
        };
        let section = &self.sections[current];
        if global + 1 < section.start + section.len() {
            self.cursor.select(global + 1);
            return;
        }
        let n = self.sections.len();
        for step in 1..=n {
            let target = &self.sections[(current + step) % n];
            if !target.is_empty() {
                self.cursor.select(target.start);
                return;
            }
        }
    }

    pub fn move_up(&mut self) {
        let Some(global) = self.cursor.selected_index() else {
            return;
        };
        let Some(current) = self.section_at(global) else {
            return;
        };
        if global > self.sections[current].start {
            self.cursor.select(global - 1);
            return;
        }
        let n = self.sections.len();
        for step in 1..=n {
            let target = &self.sections[(current + n - step) % n];
            if !target.is_empty() {
                self.cursor.select(target.start + target.len() - 1);
                return;
            }
        }
    }

    fn section_at(&self, global: usize) -> Option<usize> {
        self.sections.iter().position(|s| s.contains(global))
    }
}
