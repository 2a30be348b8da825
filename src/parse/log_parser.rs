use crate::model::ParentItem;

use super::{attach_child, child_text, split_id};

/// Parse `log.md`: top-level `- ` lines are entries (optional backticked
/// id), indented `- ` lines are their sub-notes. Entries carry no status.
pub fn parse_log(source: &str) -> Vec<ParentItem> {
    let mut entries: Vec<ParentItem> = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some(rest) = line.strip_prefix("- ") {
            let (id, text) = split_id(rest.trim_start(), idx);
            entries.push(ParentItem::new(id, idx, text.trim_end()));
        } else if let Some(text) = child_text(line) {
            attach_child(&mut entries, idx, text);
        }
    }
    entries
}
