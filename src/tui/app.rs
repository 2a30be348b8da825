use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::journal_io::{discover_journal, load_journal};
use crate::io::logging::init_logging;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::io::watcher::JournalWatcher;
use crate::io::worker::{Job, Outcome, Worker};
use crate::model::{EntityId, Journal};
use crate::ops::grouping::DueBuckets;

use super::input;
use super::render;
use super::state::{LogViewState, NoteViewState, TaskViewState};
use super::theme::Theme;

/// Which view is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Tasks,
    Log,
    Notes,
}

impl View {
    pub const ALL: [View; 3] = [View::Tasks, View::Log, View::Notes];

    pub fn label(self) -> &'static str {
        match self {
            View::Tasks => "Tasks",
            View::Log => "Log",
            View::Notes => "Notes",
        }
    }

    /// Name used in `.state.json`
    pub fn as_str(self) -> &'static str {
        match self {
            View::Tasks => "tasks",
            View::Log => "log",
            View::Notes => "notes",
        }
    }

    pub fn parse(s: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.as_str() == s)
    }

    pub fn next(self) -> View {
        match self {
            View::Tasks => View::Log,
            View::Log => View::Notes,
            View::Notes => View::Tasks,
        }
    }
}

/// Application state for the TUI
pub struct App {
    pub journal: Journal,
    pub theme: Theme,
    pub view: View,
    pub tasks: TaskViewState,
    pub log: LogViewState,
    pub notes: NoteViewState,
    /// Jobs queued by input handling, handed to the worker by the event loop
    pub outbox: Vec<Job>,
    /// Writes that succeeded but have not been seen in a loaded journal yet;
    /// their pending values stay on screen until the next successful reload
    written: Vec<EntityId>,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
    pub today: NaiveDate,
}

impl App {
    pub fn new(journal: Journal, today: NaiveDate) -> Self {
        let mut app = App {
            theme: Theme::from_config(&journal.config.ui),
            journal,
            view: View::Tasks,
            tasks: TaskViewState::new(),
            log: LogViewState::new(),
            notes: NoteViewState::new(),
            outbox: Vec::new(),
            written: Vec::new(),
            status_message: None,
            show_help: false,
            should_quit: false,
            today,
        };
        app.refresh_views();
        if let Some(home) = app.journal.home_note().map(str::to_string) {
            app.open_note(&home);
        }
        app
    }

    pub fn grouping(&self) -> DueBuckets {
        DueBuckets::new(self.today, self.journal.config.tasks.week_days)
    }

    /// Re-run every controller against the current journal
    pub fn refresh_views(&mut self) {
        let grouping = self.grouping();
        self.tasks.refresh(&self.journal.tasks, &grouping);
        self.log.refresh(&self.journal.log);
    }

    /// Swap in a freshly loaded journal, settle writes it now reflects and
    /// re-request links for the open note
    pub fn replace_journal(&mut self, journal: Journal) {
        self.theme = Theme::from_config(&journal.config.ui);
        self.journal = journal;
        for id in std::mem::take(&mut self.written) {
            self.tasks.confirm(&id);
        }
        self.refresh_views();
        if let Some(job) = self.notes.reload() {
            self.outbox.push(job);
        }
    }

    /// Reload from disk; failures keep the old data and show a message
    pub fn reload(&mut self) -> bool {
        match load_journal(&self.journal.root) {
            Ok(journal) => {
                self.replace_journal(journal);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "reload failed");
                self.status_message = Some(format!("reload failed: {e}"));
                false
            }
        }
    }

    /// Open note `slug` in the notes view
    pub fn open_note(&mut self, slug: &str) {
        let title = self.note_title(slug);
        let job = self.notes.open(slug, title);
        self.outbox.push(job);
    }

    /// Open note `slug`, remembering the current one for `back`
    pub fn follow_note(&mut self, slug: &str) {
        let title = self.note_title(slug);
        let job = self.notes.follow(slug, title);
        self.outbox.push(job);
    }

    fn note_title(&self, slug: &str) -> String {
        self.journal
            .note(slug)
            .map(|n| n.title.clone())
            .unwrap_or_else(|| slug.to_string())
    }

    pub fn handle_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::StatusWritten(change) => {
                // confirmed by the reload that picks the write up
                self.written.push(change.id.clone());
                if self.reload() {
                    self.status_message =
                        Some(format!("{} marked {}", change.id, change.status));
                }
            }
            Outcome::StatusFailed { change, error } => {
                self.tasks.revert(&change.id);
                self.status_message = Some(format!("could not update {}: {error}", change.id));
            }
            Outcome::Links { context, links } => {
                self.notes.apply_links(&context, links);
            }
            Outcome::LinksFailed { context, error } => {
                self.notes.apply_failure(&context, error);
            }
        }
    }

    /// Snapshot for `.state.json`
    pub fn ui_state(&self) -> UiState {
        UiState {
            view: self.view.as_str().to_string(),
            note: self.notes.current().map(str::to_string),
            tasks_collapsed: self
                .tasks
                .collapse
                .collapsed()
                .map(|id| id.to_string())
                .collect(),
            log_collapsed: self
                .log
                .collapse
                .collapsed()
                .map(|id| id.to_string())
                .collect(),
        }
    }

    pub fn restore_ui_state(&mut self, state: UiState) {
        if let Some(view) = View::parse(&state.view) {
            self.view = view;
        }
        self.tasks.restore_collapsed(state.tasks_collapsed);
        self.log.restore_collapsed(state.log_collapsed);
        if let Some(slug) = state.note
            && self.journal.notes.contains_key(&slug)
        {
            self.open_note(&slug);
        }
    }
}

fn save_ui_state(app: &App) {
    if let Err(e) = write_ui_state(&app.journal.dir, &app.ui_state()) {
        tracing::warn!(error = %e, "could not save ui state");
    }
}

/// Run the TUI against the journal found from `start_dir` (or the current
/// directory), optionally opening note `note` first.
pub fn run(start_dir: Option<&Path>, note: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = match start_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let root = discover_journal(&cwd)?;
    let journal = load_journal(&root)?;
    let _log_guard = init_logging(&journal.dir, &journal.config.logging)?;
    tracing::info!(root = %root.display(), "starting");

    let worker = Worker::start(&journal.dir);
    let watcher = match JournalWatcher::start(&journal.dir) {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::warn!(error = %e, "file watcher unavailable");
            None
        }
    };

    let mut app = App::new(journal, Local::now().date_naive());
    if let Some(state) = read_ui_state(&app.journal.dir) {
        app.restore_ui_state(state);
    }
    if let Some(slug) = note {
        app.view = View::Notes;
        app.open_note(slug);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, &worker, watcher.as_ref());

    save_ui_state(&app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    worker: &Worker,
    watcher: Option<&JournalWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        for job in app.outbox.drain(..) {
            if !worker.submit(job) {
                tracing::warn!("worker is gone, dropping job");
            }
        }

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            save_counter += 1;
            if save_counter >= 5 {
                save_ui_state(app);
                save_counter = 0;
            }
        }

        for outcome in worker.poll() {
            app.handle_outcome(outcome);
        }

        if let Some(watcher) = watcher
            && !watcher.poll().is_empty()
        {
            tracing::debug!("journal changed on disk");
            app.reload();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
