use indexmap::IndexMap;

use crate::model::{LinkRecord, Note, NoteLinks, NoteRef};

fn note_ref(note: &Note) -> NoteRef {
    NoteRef::new(&note.slug, note.id.clone())
}

/// Collect the links around note `slug`: its own links in written order,
/// then every other note linking to it, in note order. Returns `None` if
/// the note does not exist.
pub fn note_links(notes: &IndexMap<String, Note>, slug: &str) -> Option<NoteLinks> {
    let note = notes.get(slug)?;
    let this = note_ref(note);

    let outgoing = note
        .links
        .iter()
        .map(|link| {
            let target = notes.get(&link.target);
            LinkRecord {
                source: this.clone(),
                target: target
                    .map(note_ref)
                    .unwrap_or_else(|| NoteRef::new(&link.target, link.target.as_str())),
                context: link.line.clone(),
                resolved: target.is_some(),
            }
        })
        .collect();

    let backlinks = notes
        .values()
        .filter(|other| other.slug != slug)
        .filter_map(|other| {
            let link = other.links.iter().find(|l| l.target == slug)?;
            Some(LinkRecord {
                source: note_ref(other),
                target: this.clone(),
                context: link.line.clone(),
                resolved: true,
            })
        })
        .collect();

    Some(NoteLinks {
        outgoing,
        backlinks,
    })
}
