use std::path::PathBuf;

use chrono::NaiveDate;
use indexmap::IndexMap;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, Journal, Note};
use crate::outline::validate;
use crate::parse::{parse_log, parse_note, parse_tasks};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

pub const TASKS_MD: &str = "\
- [ ] `T-1` Write report due:today
  - gather numbers
- [ ] `T-2` Book flights due:fri
- [x] `T-3` Renew passport
- [ ] `T-4` Clean garage
";

pub const LOG_MD: &str = "\
- `L-1` 2025-05-14 09:30 Standup
  - discussed rollout
- `L-2` 2025-05-14 12:00 Lunch with Sam
";

pub const NOTES: &[(&str, &str)] = &[
    ("ideas", "# Ideas\nFeeds the [[plan]].\n"),
    ("index", "# Home\nStart at [[plan]].\n"),
    (
        "plan",
        "# Project Plan\nid: N-7\nBudget lives in [[budget]].\nBack to [[index]].\n",
    ),
];

/// Wednesday
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()
}

/// A journal with no entries at all
pub fn empty_journal() -> Journal {
    let root = PathBuf::from("/tmp/daybook-test");
    Journal {
        dir: root.join("daybook"),
        root,
        config: Config::default(),
        tasks: vec![],
        log: vec![],
        notes: IndexMap::new(),
        rejected_tasks: vec![],
        rejected_log: vec![],
        skipped_notes: vec![],
    }
}

pub fn sample_journal() -> Journal {
    let mut journal = empty_journal();
    journal.tasks = validate(parse_tasks(TASKS_MD)).parents;
    journal.log = validate(parse_log(LOG_MD)).parents;
    journal.notes = NOTES
        .iter()
        .map(|(slug, src)| (slug.to_string(), parse_note(slug, src)))
        .collect::<IndexMap<String, Note>>();
    journal
}

pub fn sample_app() -> App {
    App::new(sample_journal(), today())
}

/// Build an App whose only content is the given tasks markdown
pub fn app_with_tasks(md: &str) -> App {
    let mut journal = empty_journal();
    journal.tasks = validate(parse_tasks(md)).parents;
    App::new(journal, today())
}
