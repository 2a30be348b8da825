use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{EntityId, Note, NoteLink};

/// `[[target]]` or `[[target|label]]`
static WIKILINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]\|]+)(?:\|[^\]]*)?\]\]").expect("wikilink pattern"));

/// Normalize a note name into a slug: trimmed, lowercase, whitespace runs
/// become `-`
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Parse a note file. The title is the first `# ` heading, the id comes
/// from an `id:` line; both default to the slug. Links are collected in
/// order with one entry per target.
pub fn parse_note(slug: &str, source: &str) -> Note {
    let mut title = None;
    let mut id = None;
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    for line in source.lines() {
        let trimmed = line.trim();
        if title.is_none()
            && let Some(heading) = trimmed.strip_prefix("# ")
        {
            title = Some(heading.trim().to_string());
            continue;
        }
        if id.is_none()
            && let Some(value) = trimmed.strip_prefix("id:")
            && !value.trim().is_empty()
        {
            id = Some(EntityId::new(value.trim()));
            continue;
        }
        for cap in WIKILINK.captures_iter(trimmed) {
            let target = slugify(&cap[1]);
            if target.is_empty() || !seen.insert(target.clone()) {
                continue;
            }
            links.push(NoteLink {
                target,
                line: trimmed.to_string(),
            });
        }
    }

    Note {
        slug: slug.to_string(),
        id: id.unwrap_or_else(|| EntityId::new(slug)),
        title: title.unwrap_or_else(|| slug.to_string()),
        links,
        path: None,
    }
}
