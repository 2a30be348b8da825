use std::fs;
use std::path::Path;

use crate::io::journal_io::{
    self, CONFIG_FILE, JOURNAL_DIR, LOG_FILE, NOTES_DIR, TASKS_FILE,
};

const CONFIG_TEMPLATE: &str = r##"# daybook configuration. Every key is optional.

[tasks]
# Days, counting today, that make up the "This Week" section
week_days = 7

[notes]
# Note the notes view opens on (defaults to "index")
# home = "index"

[logging]
# Filter for daybook/.logs/; DAYBOOK_LOG overrides it
level = "info"

[ui]
# show_key_hints = false
#
# [ui.colors]
# background = "#0C001B"
# text = "#A09BFE"
# text_bright = "#FFFFFF"
# highlight = "#FB4196"
# dim = "#5A5580"
# red = "#FF4444"
# green = "#44FF88"
# cyan = "#44DDFF"
# purple = "#CC66FF"
# selection_bg = "#2A1F4A"
# pending = "#FFD700"
"##;

const TASKS_TEMPLATE: &str = "- [ ] `T-1` Try daybook due:today\n  - press x to mark it done\n";

const LOG_TEMPLATE: &str = "";

const INDEX_TEMPLATE: &str = "# Home\n\nStart here. Link other notes with [[ideas]].\n";

/// Create `daybook/` under `dir` with a config template, empty task and log
/// files, and a home note.
pub fn cmd_init(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let journal_dir = dir.join(JOURNAL_DIR);

    if journal_dir.is_dir() {
        return Err("daybook journal already exists in ./daybook/".into());
    }

    if let Some(parent) = dir.parent()
        && let Ok(parent_root) = journal_io::discover_journal(parent)
    {
        eprintln!(
            "Note: parent journal found at {}/",
            parent_root.join(JOURNAL_DIR).display()
        );
        eprintln!("Creating new journal in ./daybook/");
    }

    fs::create_dir_all(journal_dir.join(NOTES_DIR))?;
    fs::write(journal_dir.join(CONFIG_FILE), CONFIG_TEMPLATE)?;
    fs::write(journal_dir.join(TASKS_FILE), TASKS_TEMPLATE)?;
    fs::write(journal_dir.join(LOG_FILE), LOG_TEMPLATE)?;
    fs::write(journal_dir.join(NOTES_DIR).join("index.md"), INDEX_TEMPLATE)?;

    println!("Initialized daybook journal in {}", journal_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::journal_io::load_journal;
    use crate::model::Config;
    use tempfile::TempDir;

    #[test]
    fn config_template_parses() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.tasks.week_days, 7);
        assert_eq!(config.logging.level, "info");
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn creates_a_loadable_journal() {
        let tmp = TempDir::new().unwrap();
        cmd_init(tmp.path()).unwrap();

        let journal = load_journal(tmp.path()).unwrap();
        assert_eq!(journal.tasks.len(), 1);
        assert_eq!(journal.tasks[0].children.len(), 1);
        assert!(journal.log.is_empty());
        assert_eq!(journal.home_note(), Some("index"));
    }

    #[test]
    fn refuses_existing_journal() {
        let tmp = TempDir::new().unwrap();
        cmd_init(tmp.path()).unwrap();
        assert!(cmd_init(tmp.path()).is_err());
    }
}
