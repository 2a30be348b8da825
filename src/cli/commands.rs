use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "day", about = concat!("daybook v", env!("CARGO_PKG_VERSION"), " - tasks, log and notes in plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different journal directory
    #[arg(short = 'C', long = "journal-dir", global = true)]
    pub journal_dir: Option<String>,

    /// Open the notes view on this note
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a daybook/ journal in the current directory
    Init,
    /// List open tasks grouped by due date
    Tasks,
    /// List log entries
    Log,
    /// Show a note's links and backlinks
    Links(LinksArgs),
    /// Mark a task done
    Done(IdArgs),
    /// Mark a task open again
    Reopen(IdArgs),
    /// List entries dropped while loading, and links to missing notes
    Check,
}

#[derive(Args)]
pub struct LinksArgs {
    /// Note slug (file name without .md)
    pub slug: String,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task id, e.g. T-1
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["day", "-C", "/tmp/j", "--note", "plan"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.journal_dir.as_deref(), Some("/tmp/j"));
        assert_eq!(cli.note.as_deref(), Some("plan"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["day", "done", "T-1", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Commands::Done(args)) => assert_eq!(args.id, "T-1"),
            _ => panic!("expected done"),
        }
    }

    #[test]
    fn links_requires_slug() {
        assert!(Cli::try_parse_from(["day", "links"]).is_err());
    }
}
