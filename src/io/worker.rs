use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::io::journal_io::{self, NOTES_DIR};
use crate::model::{ContextKey, NoteLinks, StatusChange};
use crate::ops::links::note_links;

/// Work handed off the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// Persist a task status change
    SetStatus(StatusChange),
    /// Read the link graph around `slug`; the reply carries `context` back
    LoadLinks { context: ContextKey, slug: String },
}

/// Replies from the worker, in job order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    StatusWritten(StatusChange),
    StatusFailed { change: StatusChange, error: String },
    Links { context: ContextKey, links: NoteLinks },
    LinksFailed { context: ContextKey, error: String },
}

/// A single background thread performing journal writes and link reads.
/// Dropping the worker closes the job queue and joins the thread.
pub struct Worker {
    jobs: Option<Sender<Job>>,
    outcomes: Receiver<Outcome>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn start(dir: &Path) -> Self {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (out_tx, out_rx) = mpsc::channel();
        let dir = dir.to_path_buf();
        let handle = thread::spawn(move || {
            for job in job_rx {
                let outcome = run(&dir, job);
                if out_tx.send(outcome).is_err() {
                    break;
                }
            }
            tracing::debug!("worker stopped");
        });
        Worker {
            jobs: Some(job_tx),
            outcomes: out_rx,
            handle: Some(handle),
        }
    }

    /// Queue a job. Returns false if the worker thread is gone.
    pub fn submit(&self, job: Job) -> bool {
        match &self.jobs {
            Some(tx) => tx.send(job).is_ok(),
            None => false,
        }
    }

    /// Drain finished outcomes without blocking
    pub fn poll(&self) -> Vec<Outcome> {
        self.outcomes.try_iter().collect()
    }

    /// Wait up to `timeout` for the next outcome
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Outcome> {
        match self.outcomes.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run(dir: &Path, job: Job) -> Outcome {
    match job {
        Job::SetStatus(change) => {
            match journal_io::write_task_status(dir, &change.id, change.status) {
                Ok(()) => Outcome::StatusWritten(change),
                Err(e) => {
                    tracing::warn!(id = %change.id, error = %e, "status change failed");
                    Outcome::StatusFailed {
                        change,
                        error: e.to_string(),
                    }
                }
            }
        }
        Job::LoadLinks { context, slug } => {
            let links = journal_io::load_notes(&dir.join(NOTES_DIR))
                .map_err(|e| e.to_string())
                .and_then(|loaded| {
                    note_links(&loaded.notes, &slug).ok_or_else(|| format!("note not found: {slug}"))
                });
            match links {
                Ok(links) => Outcome::Links { context, links },
                Err(error) => Outcome::LinksFailed { context, error },
            }
        }
    }
}
