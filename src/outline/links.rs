use crate::model::{ContextKey, LinkRecord, NoteLinks, NoteRef};

use super::collapse::CollapseStateStore;
use super::viewport::Viewport;

/// The two fixed sections of the link graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkSection {
    Outgoing,
    Backlinks,
}

impl LinkSection {
    pub const ALL: [LinkSection; 2] = [LinkSection::Outgoing, LinkSection::Backlinks];

    pub fn label(self) -> &'static str {
        match self {
            LinkSection::Outgoing => "Links",
            LinkSection::Backlinks => "Backlinks",
        }
    }
}

/// One addressable line of the link graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLine {
    Header(LinkSection),
    Row { section: LinkSection, index: usize },
    /// Placeholder for an expanded section with no links
    Empty(LinkSection),
}

impl LinkLine {
    pub fn section(self) -> LinkSection {
        match self {
            LinkLine::Header(s) | LinkLine::Empty(s) => s,
            LinkLine::Row { section, .. } => section,
        }
    }
}

/// What activating the line under the cursor did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Toggled {
        section: LinkSection,
        collapsed: bool,
    },
    /// Go to this note
    Navigate(NoteRef),
    Nothing,
}

/// Cursor over `[links header, links…, backlinks header, backlinks…]`.
///
/// Rows of a collapsed section stay addressable but are skipped by
/// movement and not rendered; headers are always reachable. Collapse flags
/// are scoped to the viewed note.
#[derive(Debug, Clone)]
pub struct LinkGraphCursor {
    context: Option<ContextKey>,
    links: NoteLinks,
    collapse: CollapseStateStore<LinkSection>,
    cursor: usize,
    viewport: Viewport,
}

impl LinkGraphCursor {
    pub fn new(height: usize) -> Self {
        LinkGraphCursor {
            context: None,
            links: NoteLinks::default(),
            collapse: CollapseStateStore::new(),
            cursor: 0,
            viewport: Viewport::new(height),
        }
    }

    pub fn context(&self) -> Option<&ContextKey> {
        self.context.as_ref()
    }

    /// Switch to another note. A different key clears the links, collapse
    /// flags, cursor and scroll; returns whether it was different.
    pub fn set_context(&mut self, key: impl Into<ContextKey>) -> bool {
        let key = key.into();
        if !self.collapse.set_context(key.clone()) {
            return false;
        }
        self.context = Some(key);
        self.links = NoteLinks::default();
        self.cursor = 0;
        self.viewport.reset();
        true
    }

    /// Take fresh links for `context`. Links for any other note than the
    /// active one are stale and dropped whole.
    pub fn load(&mut self, context: &ContextKey, links: NoteLinks) -> bool {
        if self.context.as_ref() != Some(context) {
            tracing::debug!(%context, active = ?self.context, "dropping stale links");
            return false;
        }
        self.links = links;
        self.settle();
        true
    }

    pub fn links(&self) -> &NoteLinks {
        &self.links
    }

    pub fn records(&self, section: LinkSection) -> &[LinkRecord] {
        match section {
            LinkSection::Outgoing => &self.links.outgoing,
            LinkSection::Backlinks => &self.links.backlinks,
        }
    }

    pub fn is_collapsed(&self, section: LinkSection) -> bool {
        self.collapse.is_collapsed(&section)
    }

    pub fn toggle(&mut self, section: LinkSection) {
        self.collapse.toggle(section);
        self.settle();
    }

    /// Every addressable line, hidden rows included
    pub fn lines(&self) -> Vec<LinkLine> {
        let mut lines = Vec::new();
        for section in LinkSection::ALL {
            lines.push(LinkLine::Header(section));
            let count = self.records(section).len();
            if count == 0 {
                if !self.is_collapsed(section) {
                    lines.push(LinkLine::Empty(section));
                }
            } else {
                lines.extend((0..count).map(|index| LinkLine::Row { section, index }));
            }
        }
        lines
    }

    /// Lines that are rendered
    pub fn visible_lines(&self) -> Vec<LinkLine> {
        self.lines()
            .into_iter()
            .filter(|l| !self.is_hidden(*l))
            .collect()
    }

    pub fn is_hidden(&self, line: LinkLine) -> bool {
        matches!(line, LinkLine::Row { section, .. } if self.is_collapsed(section))
    }

    /// Absolute line index of the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_line(&self) -> Option<LinkLine> {
        self.lines().get(self.cursor).copied()
    }

    /// Position of the cursor among the rendered lines
    pub fn display_row(&self) -> usize {
        self.lines()
            .iter()
            .take(self.cursor)
            .filter(|l| !self.is_hidden(**l))
            .count()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_height(&mut self, height: usize) {
        self.viewport.set_height(height);
        self.viewport.follow(self.display_row());
    }

    pub fn move_down(&mut self) {
        let lines = self.lines();
        if let Some(next) = (self.cursor + 1..lines.len()).find(|&i| !self.is_hidden(lines[i])) {
            self.cursor = next;
        }
        self.viewport.follow(self.display_row());
    }

    pub fn move_up(&mut self) {
        let lines = self.lines();
        if let Some(prev) = (0..self.cursor).rev().find(|&i| !self.is_hidden(lines[i])) {
            self.cursor = prev;
        }
        self.viewport.follow(self.display_row());
    }

    /// The record behind a row line
    pub fn record(&self, line: LinkLine) -> Option<&LinkRecord> {
        match line {
            LinkLine::Row { section, index } => self.records(section).get(index),
            _ => None,
        }
    }

    /// Headers toggle their section; rows yield the note on the other end
    /// of the link (the source note for a backlink).
    pub fn activate(&mut self) -> Activation {
        let Some(line) = self.cursor_line() else {
            return Activation::Nothing;
        };
        match line {
            LinkLine::Header(section) => {
                self.toggle(section);
                Activation::Toggled {
                    section,
                    collapsed: self.is_collapsed(section),
                }
            }
            LinkLine::Row { section, .. } => match self.record(line) {
                Some(record) => Activation::Navigate(match section {
                    LinkSection::Outgoing => record.target.clone(),
                    LinkSection::Backlinks => record.source.clone(),
                }),
                None => Activation::Nothing,
            },
            LinkLine::Empty(_) => Activation::Nothing,
        }
    }

    /// Clamp the cursor after the lines changed; a cursor on a hidden row
    /// moves to its section header.
    fn settle(&mut self) {
        let lines = self.lines();
        self.cursor = self.cursor.min(lines.len().saturating_sub(1));
        let line = lines[self.cursor];
        if self.is_hidden(line) {
            let section = line.section();
            self.cursor = lines
                .iter()
                .position(|l| *l == LinkLine::Header(section))
                .unwrap_or(0);
        }
        self.viewport.follow(self.display_row());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(source: &str, target: &str) -> LinkRecord {
        LinkRecord {
            source: NoteRef::new(source, format!("id-{source}")),
            target: NoteRef::new(target, format!("id-{target}")),
            context: format!("see [[{target}]]"),
            resolved: true,
        }
    }

    fn graph(outgoing: &[&str], backlinks: &[&str]) -> LinkGraphCursor {
        let mut g = LinkGraphCursor::new(10);
        g.set_context("home");
        g.load(
            &ContextKey::from("home"),
            NoteLinks {
                outgoing: outgoing.iter().map(|t| record("home", t)).collect(),
                backlinks: backlinks.iter().map(|s| record(s, "home")).collect(),
            },
        );
        g
    }

    #[test]
    fn lines_have_headers_rows_and_placeholders() {
        let g = graph(&["a", "b"], &[]);
        assert_eq!(
            g.lines(),
            vec![
                LinkLine::Header(LinkSection::Outgoing),
                LinkLine::Row {
                    section: LinkSection::Outgoing,
                    index: 0
                },
                LinkLine::Row {
                    section: LinkSection::Outgoing,
                    index: 1
                },
                LinkLine::Header(LinkSection::Backlinks),
                LinkLine::Empty(LinkSection::Backlinks),
            ]
        );
    }

    #[test]
    fn collapsed_empty_section_has_no_placeholder() {
        let mut g = graph(&["a"], &[]);
        g.toggle(LinkSection::Backlinks);
        assert_eq!(g.lines().len(), 3);
    }

    #[test]
    fn movement_skips_collapsed_rows_not_headers() {
        let mut g = graph(&["a", "b"], &["x"]);
        g.toggle(LinkSection::Outgoing);
        assert_eq!(g.cursor(), 0);
        g.move_down();
        assert_eq!(g.cursor_line(), Some(LinkLine::Header(LinkSection::Backlinks)));
        assert_eq!(g.cursor(), 3);
        g.move_down();
        assert_eq!(g.cursor(), 4);
        g.move_down();
        assert_eq!(g.cursor(), 4);
        g.move_up();
        g.move_up();
        assert_eq!(g.cursor(), 0);
        g.move_up();
        assert_eq!(g.cursor(), 0);
    }

    #[test]
    fn activating_header_toggles_only_that_section() {
        let mut g = graph(&["a"], &["x"]);
        g.move_down();
        g.move_down();
        assert_eq!(g.cursor_line(), Some(LinkLine::Header(LinkSection::Backlinks)));
        assert_eq!(
            g.activate(),
            Activation::Toggled {
                section: LinkSection::Backlinks,
                collapsed: true
            }
        );
        assert!(g.is_collapsed(LinkSection::Backlinks));
        assert!(!g.is_collapsed(LinkSection::Outgoing));
        assert_eq!(g.cursor(), 2);
    }

    #[test]
    fn outgoing_row_navigates_to_target() {
        let mut g = graph(&["a"], &[]);
        g.move_down();
        assert_eq!(g.activate(), Activation::Navigate(NoteRef::new("a", "id-a")));
    }

    #[test]
    fn backlink_row_navigates_to_source() {
        let mut g = graph(&[], &["x"]);
        // links header, empty placeholder, backlinks header, row
        g.move_down();
        g.move_down();
        g.move_down();
        assert_eq!(g.activate(), Activation::Navigate(NoteRef::new("x", "id-x")));
    }

    #[test]
    fn placeholder_does_nothing() {
        let mut g = graph(&[], &[]);
        g.move_down();
        assert_eq!(g.cursor_line(), Some(LinkLine::Empty(LinkSection::Outgoing)));
        assert_eq!(g.activate(), Activation::Nothing);
    }

    #[test]
    fn stale_links_are_dropped() {
        let mut g = graph(&["a"], &[]);
        g.set_context("other");
        let stale = NoteLinks {
            outgoing: vec![record("home", "b")],
            backlinks: vec![],
        };
        assert!(!g.load(&ContextKey::from("home"), stale));
        assert!(g.links().outgoing.is_empty());
    }

    #[test]
    fn same_note_reload_keeps_collapse() {
        let mut g = graph(&["a"], &["x"]);
        g.toggle(LinkSection::Backlinks);
        assert!(!g.set_context("home"));
        g.load(
            &ContextKey::from("home"),
            NoteLinks {
                outgoing: vec![record("home", "a"), record("home", "b")],
                backlinks: vec![record("x", "home")],
            },
        );
        assert!(g.is_collapsed(LinkSection::Backlinks));
    }

    #[test]
    fn switching_note_resets_collapse_and_cursor() {
        let mut g = graph(&["a"], &["x"]);
        g.toggle(LinkSection::Backlinks);
        g.move_down();
        assert!(g.set_context("a"));
        assert!(!g.is_collapsed(LinkSection::Backlinks));
        assert_eq!(g.cursor(), 0);
    }

    #[test]
    fn collapsing_under_the_cursor_moves_to_header() {
        let mut g = graph(&["a", "b"], &[]);
        g.move_down();
        g.move_down();
        g.toggle(LinkSection::Outgoing);
        assert_eq!(g.cursor(), 0);
    }

    #[test]
    fn shrinking_reload_clamps_cursor() {
        let mut g = graph(&["a", "b", "c"], &["x"]);
        for _ in 0..5 {
            g.move_down();
        }
        assert_eq!(g.cursor(), 5);
        g.load(&ContextKey::from("home"), NoteLinks::default());
        assert_eq!(g.cursor(), 3);
    }

    #[test]
    fn viewport_follows_display_row() {
        let mut g = graph(&["a", "b", "c", "d", "e", "f"], &["x", "y"]);
        g.set_height(4);
        for _ in 0..5 {
            g.move_down();
        }
        assert_eq!(g.viewport().offset(), 2);
        g.move_down();
        assert_eq!(g.viewport().offset(), 3);
        for _ in 0..6 {
            g.move_up();
        }
        assert_eq!(g.viewport().offset(), 0);
    }

    #[test]
    fn viewport_counts_only_rendered_lines() {
        let mut g = graph(&["a", "b", "c", "d", "e", "f"], &["x", "y"]);
        g.set_height(3);
        g.toggle(LinkSection::Outgoing);
        g.move_down();
        g.move_down();
        // cursor on backlinks row 0: absolute 8, rendered row 2
        assert_eq!(g.cursor(), 8);
        assert_eq!(g.display_row(), 2);
        assert_eq!(g.viewport().offset(), 0);
        g.move_down();
        assert_eq!(g.viewport().offset(), 1);
    }
}
