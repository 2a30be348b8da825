mod init;
pub use init::cmd_init;

use std::path::Path;

use chrono::Local;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::journal_io::{self, JournalError};
use crate::io::logging::init_logging;
use crate::model::{EntityId, Journal, Status};
use crate::ops::check;
use crate::ops::grouping::DueBuckets;
use crate::ops::links::note_links;
use crate::outline::Grouping;
use crate::parse::slugify;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let start = match &cli.journal_dir {
        Some(dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
        None => std::env::current_dir()?,
    };

    match cli.command {
        None => crate::tui::run(Some(start.as_path()), cli.note.as_deref()),
        Some(cmd) => match cmd {
            Commands::Init => cmd_init(&start),

            // Read commands
            Commands::Tasks => cmd_tasks(&load_journal_from(&start)?, json),
            Commands::Log => cmd_log(&load_journal_from(&start)?, json),
            Commands::Links(args) => cmd_links(&load_journal_from(&start)?, &args.slug, json),
            Commands::Check => cmd_check(&load_journal_from(&start)?, json),

            // Write commands
            Commands::Done(args) => cmd_set_status(&start, &args.id, Status::Done),
            Commands::Reopen(args) => cmd_set_status(&start, &args.id, Status::Open),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_journal_from(start: &Path) -> Result<Journal, JournalError> {
    let root = journal_io::discover_journal(start)?;
    journal_io::load_journal(&root)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_tasks(journal: &Journal, json: bool) -> CmdResult {
    let today = Local::now().date_naive();
    let grouping = DueBuckets::new(today, journal.config.tasks.week_days);
    let sections = grouping.group(&journal.tasks);

    if json {
        let out: Vec<_> = sections.iter().map(section_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(&format_sections(&sections));
    }
    Ok(())
}

fn cmd_log(journal: &Journal, json: bool) -> CmdResult {
    if json {
        let out: Vec<_> = journal.log.iter().map(item_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(&format_log(&journal.log));
    }
    Ok(())
}

fn cmd_links(journal: &Journal, name: &str, json: bool) -> CmdResult {
    let slug = slugify(name);
    let note = journal
        .note(&slug)
        .ok_or_else(|| format!("note not found: {}", name))?;
    let links = note_links(&journal.notes, &slug).unwrap_or_default();

    if json {
        let out = LinksJson {
            slug: note.slug.clone(),
            title: note.title.clone(),
            links,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(&format_links(&note.title, &links));
    }
    Ok(())
}

fn cmd_check(journal: &Journal, json: bool) -> CmdResult {
    let result = check::check_journal(journal);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_lines(&format_check(&result));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_set_status(start: &Path, id: &str, status: Status) -> CmdResult {
    let root = journal_io::discover_journal(start)?;
    let journal = journal_io::load_journal(&root)?;
    let _log_guard = match init_logging(&journal.dir, &journal.config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    };

    let id = EntityId::new(id);
    if journal.task(id.as_str()).is_some_and(|t| t.status == Some(status)) {
        println!("{} is already {}", id, status);
        return Ok(());
    }
    journal_io::write_task_status(&journal.dir, &id, status)?;
    println!("{} marked {}", id, status);
    Ok(())
}
