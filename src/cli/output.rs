use serde::Serialize;

use crate::model::{ChildItem, LinkRecord, NoteLinks, ParentItem, Status};
use crate::ops::check::{CheckError, CheckResult, CheckWarning};
use crate::outline::Section;
use crate::util::dates::extract_due;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<ChildJson>,
}

#[derive(Serialize)]
pub struct ChildJson {
    pub id: String,
    pub text: String,
}

#[derive(Serialize)]
pub struct SectionJson {
    pub name: String,
    pub items: Vec<ItemJson>,
}

#[derive(Serialize)]
pub struct LinksJson {
    pub slug: String,
    pub title: String,
    #[serde(flatten)]
    pub links: NoteLinks,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn item_to_json(item: &ParentItem) -> ItemJson {
    ItemJson {
        id: item.id.to_string(),
        text: item.text.clone(),
        status: item.status,
        due: extract_due(&item.text).map(str::to_string),
        notes: item.children.iter().map(child_to_json).collect(),
    }
}

fn child_to_json(child: &ChildItem) -> ChildJson {
    ChildJson {
        id: child.id.to_string(),
        text: child.text.clone(),
    }
}

pub fn section_to_json(section: &Section) -> SectionJson {
    SectionJson {
        name: section.name.clone(),
        items: section.items.iter().map(item_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One-line summary: `[ ] T-1 Write report`, or `T-1 text` without a checkbox
pub fn format_item_line(item: &ParentItem) -> String {
    let id_str = if item.id.is_positional() {
        String::new()
    } else {
        format!("{} ", item.id)
    };
    match item.status {
        Some(status) => format!("[{}] {}{}", status.checkbox_char(), id_str, item.text),
        None => format!("{}{}", id_str, item.text),
    }
}

/// An item followed by its sub-notes, indented
pub fn format_item_tree(item: &ParentItem, indent: usize) -> Vec<String> {
    let prefix = "  ".repeat(indent);
    let mut lines = vec![format!("{}{}", prefix, format_item_line(item))];
    for child in &item.children {
        lines.push(format!("{}    - {}", prefix, child.text));
    }
    lines
}

/// Every section with its count, `(none)` under empty ones
pub fn format_sections(sections: &[Section]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{} ({})", section.name, section.items.len()));
        if section.items.is_empty() {
            lines.push("  (none)".to_string());
        }
        for item in &section.items {
            lines.extend(format_item_tree(item, 1));
        }
    }
    lines
}

pub fn format_log(entries: &[ParentItem]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| format_item_tree(e, 0))
        .collect()
}

fn format_link(arrow: &str, slug: &str, record: &LinkRecord) -> String {
    let missing = if record.resolved { "" } else { " (missing)" };
    format!("  {} {}{}  {}", arrow, slug, missing, record.context)
}

pub fn format_links(title: &str, links: &NoteLinks) -> Vec<String> {
    let mut lines = vec![title.to_string(), String::new()];
    lines.push(format!("Links ({})", links.outgoing.len()));
    if links.outgoing.is_empty() {
        lines.push("  (none)".to_string());
    }
    for r in &links.outgoing {
        lines.push(format_link("\u{2192}", &r.target.slug, r));
    }
    lines.push(format!("Backlinks ({})", links.backlinks.len()));
    if links.backlinks.is_empty() {
        lines.push("  (none)".to_string());
    }
    for r in &links.backlinks {
        lines.push(format_link("\u{2190}", &r.source.slug, r));
    }
    lines
}

pub fn format_check(result: &CheckResult) -> Vec<String> {
    let mut lines = Vec::new();
    if !result.errors.is_empty() {
        lines.push("Errors:".to_string());
        for err in &result.errors {
            match err {
                CheckError::Rejected {
                    file,
                    line,
                    id,
                    parent,
                    reason,
                } => {
                    let under = parent
                        .as_ref()
                        .map(|p| format!(" under {p}"))
                        .unwrap_or_default();
                    lines.push(format!("  {file}:{line} `{id}`{under} dropped: {reason}"));
                }
                CheckError::SkippedNote { file, reason } => {
                    lines.push(format!("  {file} skipped: {reason}"));
                }
            }
        }
    }
    if !result.warnings.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Warnings:".to_string());
        for warn in &result.warnings {
            match warn {
                CheckWarning::MissingNote { source, target } => {
                    lines.push(format!("  {source} links to missing note: {target}"));
                }
                CheckWarning::MissingId { line, text } => {
                    lines.push(format!("  tasks.md:{line} task missing id: \"{text}\""));
                }
            }
        }
    }
    if result.valid {
        lines.push("\u{2713} journal is valid".to_string());
    } else {
        lines.push("\u{2717} journal has errors".to_string());
    }
    lines
}
