use crate::model::{ParentItem, Status};

use super::{attach_child, child_text, split_id};

/// Parse `tasks.md`.
///
/// Top-level `- [ ]` / `- [x]` lines are tasks, optionally followed by a
/// backticked id; indented `- text` lines are sub-notes of the task above.
/// Everything else (headings, prose, blank lines) is ignored. Positions are
/// 0-based line indexes. No validation happens here.
pub fn parse_tasks(source: &str) -> Vec<ParentItem> {
    let mut tasks: Vec<ParentItem> = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some((status, rest)) = task_line(line) {
            let (id, text) = split_id(rest, idx);
            tasks.push(ParentItem::new(id, idx, text.trim_end()).with_status(status));
        } else if let Some(text) = child_text(line) {
            attach_child(&mut tasks, idx, text);
        }
    }
    tasks
}

/// Checkbox state and the text after `- [c] ` for a top-level task line
pub(crate) fn task_line(line: &str) -> Option<(Status, &str)> {
    let rest = line.strip_prefix("- [")?;
    let mut chars = rest.chars();
    let status = Status::from_checkbox_char(chars.next()?)?;
    let after = chars.as_str().strip_prefix(']')?;
    if !after.is_empty() && !after.starts_with(' ') {
        return None;
    }
    Some((status, after.trim_start()))
}
