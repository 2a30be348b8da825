pub mod log_parser;
pub mod note_parser;
pub mod task_parser;

pub use log_parser::parse_log;
pub use note_parser::{parse_note, slugify};
pub use task_parser::parse_tasks;

use crate::model::{EntityId, ParentItem};

/// Split an optional leading `` `ID` `` off `s`. A line without one gets
/// the positional key `_L<line>` (1-based); empty backticks give an empty
/// id, which validation rejects.
pub(crate) fn split_id(s: &str, line_idx: usize) -> (EntityId, &str) {
    if let Some(after_tick) = s.strip_prefix('`')
        && let Some(end_tick) = after_tick.find('`')
    {
        let id = after_tick[..end_tick].trim();
        let rest = &after_tick[end_tick + 1..];
        return (EntityId::new(id), rest.trim_start());
    }
    (positional_id(line_idx), s)
}

pub(crate) fn positional_id(line_idx: usize) -> EntityId {
    EntityId::new(format!("_L{}", line_idx + 1))
}

/// Text of an indented `- note` line, if this is one
pub(crate) fn child_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if trimmed.len() == line.len() {
        return None;
    }
    trimmed
        .strip_prefix("- ")
        .or_else(|| (trimmed == "-").then_some(""))
        .map(str::trim_end)
}

/// Attach an indented child line to the last parent, if any
pub(crate) fn attach_child(items: &mut [ParentItem], line_idx: usize, text: &str) -> bool {
    match items.last_mut() {
        Some(parent) => {
            parent.push_child(line_idx, text);
            true
        }
        None => {
            tracing::debug!(line = line_idx + 1, "sub-note before any item, skipping");
            false
        }
    }
}
