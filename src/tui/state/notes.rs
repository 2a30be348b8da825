use crate::io::worker::Job;
use crate::model::{ContextKey, NoteLinks};
use crate::outline::LinkGraphCursor;

/// Controller for the notes view: the link graph around one note plus a
/// history of notes visited by following links.
#[derive(Debug, Clone)]
pub struct NoteViewState {
    pub links: LinkGraphCursor,
    title: String,
    history: Vec<String>,
    loading: bool,
    error: Option<String>,
}

impl Default for NoteViewState {
    fn default() -> Self {
        NoteViewState {
            links: LinkGraphCursor::new(0),
            title: String::new(),
            history: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl NoteViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug of the open note
    pub fn current(&self) -> Option<&str> {
        self.links.context().map(|c| c.as_str())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Show note `slug`. Opening a different note resets collapse flags,
    /// cursor and scroll; either way the links are requested again.
    pub fn open(&mut self, slug: &str, title: impl Into<String>) -> Job {
        if self.links.set_context(slug) {
            tracing::debug!(slug, "opened note");
        }
        self.title = title.into();
        self.request()
    }

    /// Like `open`, remembering the current note for `back`
    pub fn follow(&mut self, slug: &str, title: impl Into<String>) -> Job {
        if let Some(current) = self.current()
            && current != slug
        {
            self.history.push(current.to_string());
        }
        self.open(slug, title)
    }

    /// The previous note, if any. The caller opens it with `open`.
    pub fn back(&mut self) -> Option<String> {
        self.history.pop()
    }

    /// Re-request links for the open note (after the journal changed)
    pub fn reload(&mut self) -> Option<Job> {
        self.current()?;
        Some(self.request())
    }

    fn request(&mut self) -> Job {
        self.loading = true;
        self.error = None;
        let slug = self.current().unwrap_or_default().to_string();
        Job::LoadLinks {
            context: ContextKey::new(slug.clone()),
            slug,
        }
    }

    /// Apply a link reply; replies for any note but the open one are
    /// dropped.
    pub fn apply_links(&mut self, context: &ContextKey, links: NoteLinks) -> bool {
        if !self.links.load(context, links) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn apply_failure(&mut self, context: &ContextKey, error: String) -> bool {
        if self.links.context() != Some(context) {
            return false;
        }
        self.loading = false;
        self.links.load(context, NoteLinks::default());
        self.error = Some(error);
        true
    }
}
