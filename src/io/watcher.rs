use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the TUI event loop
#[derive(Debug)]
pub enum FileEvent {
    /// Journal files changed on disk
    Changed(Vec<PathBuf>),
}

/// Watches `daybook/` for edits made outside the TUI
pub struct JournalWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

/// Whether a changed path should trigger a reload
pub fn is_relevant(dir: &Path, path: &Path) -> bool {
    let Ok(rel) = path.strip_prefix(dir) else {
        return false;
    };
    if rel.starts_with(".logs") {
        return false;
    }
    if let Some(name) = path.file_name().and_then(|n| n.to_str())
        && (name == ".lock" || name == ".state.json" || name.starts_with(".tmp"))
    {
        return false;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md") | Some("toml")
    )
}

impl JournalWatcher {
    pub fn start(dir: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let root = dir.to_path_buf();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let Ok(event) = result else {
                    return;
                };
                if !matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    return;
                }
                let changed: Vec<PathBuf> = event
                    .paths
                    .into_iter()
                    .filter(|p| is_relevant(&root, p))
                    .collect();
                if !changed.is_empty() {
                    let _ = tx.send(FileEvent::Changed(changed));
                }
            },
            Config::default(),
        )?;

        watcher.watch(dir, RecursiveMode::Recursive)?;
        Ok(JournalWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Drain queued events without blocking
    pub fn poll(&self) -> Vec<FileEvent> {
        self.rx.try_iter().collect()
    }
}
