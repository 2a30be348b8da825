use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;

use crate::io::lock::{FileLock, LockError};
use crate::model::{Config, EntityId, Journal, Note, SkippedNote, Status};
use crate::ops::task_ops::{TaskError, set_status_in_source};
use crate::outline::validate;
use crate::parse::{parse_log, parse_note, parse_tasks, slugify};

pub const JOURNAL_DIR: &str = "daybook";
pub const CONFIG_FILE: &str = "config.toml";
pub const TASKS_FILE: &str = "tasks.md";
pub const LOG_FILE: &str = "log.md";
pub const NOTES_DIR: &str = "notes";

/// Error type for journal I/O
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("not a daybook journal: no daybook/config.toml found")]
    NotAJournal,
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not parse config.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error(transparent)]
    Task(#[from] TaskError),
}

/// Walk up from `start` to the first directory holding `daybook/config.toml`
pub fn discover_journal(start: &Path) -> Result<PathBuf, JournalError> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(JOURNAL_DIR).join(CONFIG_FILE).is_file() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(JournalError::NotAJournal);
        }
    }
}

fn read(path: &Path) -> Result<String, JournalError> {
    fs::read_to_string(path).map_err(|source| JournalError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// Like `read`, but a missing file reads as empty
fn read_optional(path: &Path) -> Result<String, JournalError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(JournalError::ReadError {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load and validate the journal under `root`.
///
/// Malformed tasks and log entries are dropped and reported in
/// `rejected_tasks` / `rejected_log`; they never fail the load.
pub fn load_journal(root: &Path) -> Result<Journal, JournalError> {
    let dir = root.join(JOURNAL_DIR);
    if !dir.is_dir() {
        return Err(JournalError::NotAJournal);
    }
    let config: Config = toml::from_str(&read(&dir.join(CONFIG_FILE))?)?;

    let tasks = validate(parse_tasks(&read_optional(&dir.join(TASKS_FILE))?));
    let log = validate(parse_log(&read_optional(&dir.join(LOG_FILE))?));
    for (file, r) in tasks
        .rejected
        .iter()
        .map(|r| (TASKS_FILE, r))
        .chain(log.rejected.iter().map(|r| (LOG_FILE, r)))
    {
        tracing::warn!(file, id = %r.id, line = r.position + 1, reason = %r.reason, "dropped malformed entry");
    }

    let LoadedNotes { notes, skipped } = load_notes(&dir.join(NOTES_DIR))?;
    tracing::debug!(
        tasks = tasks.parents.len(),
        log = log.parents.len(),
        notes = notes.len(),
        "journal loaded"
    );

    Ok(Journal {
        root: root.to_path_buf(),
        dir,
        config,
        tasks: tasks.parents,
        log: log.parents,
        notes,
        rejected_tasks: tasks.rejected,
        rejected_log: log.rejected,
        skipped_notes: skipped,
    })
}

/// Notes keyed by slug, plus the files that were left out
#[derive(Debug, Default)]
pub struct LoadedNotes {
    pub notes: IndexMap<String, Note>,
    pub skipped: Vec<SkippedNote>,
}

/// Parse every `*.md` file in `notes_dir`, keyed by slug in file name order.
///
/// A file that can't be read as UTF-8 text, or whose slug an earlier file
/// already took, is skipped and reported instead of failing the load.
pub fn load_notes(notes_dir: &Path) -> Result<LoadedNotes, JournalError> {
    let mut loaded = LoadedNotes::default();
    let entries = match fs::read_dir(notes_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(loaded),
        Err(source) => {
            return Err(JournalError::ReadError {
                path: notes_dir.to_path_buf(),
                source,
            });
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("md"))
        .collect();
    paths.sort();

    for path in paths {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(slugify)
            .unwrap_or_default();
        let skip = if slug.is_empty() {
            Err("no usable name".to_string())
        } else if let Some(kept) = loaded.notes.get(&slug) {
            let kept = kept
                .path
                .as_deref()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Err(format!("slug `{slug}` already used by {kept}"))
        } else {
            fs::read_to_string(&path).map_err(|e| e.to_string())
        };
        match skip {
            Ok(source) => {
                let mut note = parse_note(&slug, &source);
                note.path = Some(path);
                loaded.notes.insert(slug, note);
            }
            Err(reason) => {
                tracing::warn!(%file, %reason, "skipped note");
                loaded.skipped.push(SkippedNote { file, reason });
            }
        }
    }
    Ok(loaded)
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Set the checkbox of task `id` in `tasks.md`, holding the journal lock
/// for the read-modify-write.
pub fn write_task_status(dir: &Path, id: &EntityId, status: Status) -> Result<(), JournalError> {
    let _lock = FileLock::acquire_default(dir)?;
    let path = dir.join(TASKS_FILE);
    let updated = set_status_in_source(&read(&path)?, id.as_str(), status)?;
    atomic_write(&path, updated.as_bytes()).map_err(|source| {
        tracing::warn!(%id, error = %source, "task write failed");
        JournalError::WriteError {
            path: path.clone(),
            source,
        }
    })?;
    tracing::info!(%id, %status, "task status written");
    Ok(())
}
