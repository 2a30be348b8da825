use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

const STATE_FILE: &str = ".state.json";

/// TUI state carried across sessions in `daybook/.state.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiState {
    /// "tasks", "log" or "notes"
    pub view: String,
    /// Slug of the note last open in the notes view
    #[serde(default)]
    pub note: Option<String>,
    /// Collapsed task ids
    #[serde(default)]
    pub tasks_collapsed: BTreeSet<String>,
    /// Collapsed log entry ids
    #[serde(default)]
    pub log_collapsed: BTreeSet<String>,
}

/// `None` if the file is missing or unreadable
pub fn read_ui_state(dir: &Path) -> Option<UiState> {
    let content = fs::read_to_string(dir.join(STATE_FILE)).ok()?;
    match serde_json::from_str(&content) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed ui state");
            None
        }
    }
}

pub fn write_ui_state(dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let content = serde_json::to_string_pretty(state)?;
    fs::write(dir.join(STATE_FILE), content)
}
