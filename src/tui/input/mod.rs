mod common;
mod log;
mod notes;
mod tasks;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, View};

use common::normalize_key;

/// Handle one key press to completion
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    let key = normalize_key(key);
    app.status_message = None;

    if app.show_help {
        // any key closes help; q still quits
        app.show_help = false;
        if key.code != KeyCode::Char('q') {
            return;
        }
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        (KeyCode::Char('?'), _) => app.show_help = true,
        (KeyCode::Char('1'), _) => app.view = View::Tasks,
        (KeyCode::Char('2'), _) => app.view = View::Log,
        (KeyCode::Char('3'), _) => app.view = View::Notes,
        (KeyCode::Tab, _) => app.view = app.view.next(),
        _ => match app.view {
            View::Tasks => tasks::handle_tasks_key(app, key),
            View::Log => log::handle_log_key(app, key),
            View::Notes => notes::handle_notes_key(app, key),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::worker::Job;
    use crate::model::{EntityId, Status};
    use crate::tui::render::test_helpers::sample_app;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn switches_views() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view, View::Log);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, View::Notes);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.view, View::Tasks);
    }

    #[test]
    fn help_swallows_next_key() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('2'));
        assert!(!app.show_help);
        assert_eq!(app.view, View::Tasks);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn x_queues_a_status_write() {
        let mut app = sample_app();
        app.outbox.clear();
        press(&mut app, KeyCode::Char('x'));
        let Some(Job::SetStatus(change)) = app.outbox.pop() else {
            panic!("expected a status job");
        };
        assert_eq!(change.status, Status::Done);
        assert!(app.tasks.is_pending(&change.id));

        // in flight: a second x does nothing
        press(&mut app, KeyCode::Char('x'));
        assert!(app.outbox.is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn enter_collapses_in_log() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('2'));
        let before = app.log.cursor.len();
        press(&mut app, KeyCode::Enter);
        assert!(app.log.cursor.len() < before);
        assert!(app.log.collapse.is_collapsed(&EntityId::from("L-1")));
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.log.cursor.selected_index(), Some(app.log.cursor.len() - 1));
    }

    #[test]
    fn notes_follow_and_back() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('3'));
        load_pending_links(&mut app);
        // index links to plan: header, row
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notes.current(), Some("plan"));
        assert_eq!(app.notes.title(), "Project Plan");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.notes.current(), Some("index"));
    }

    /// Answer queued link jobs in-process
    fn load_pending_links(app: &mut App) {
        for job in std::mem::take(&mut app.outbox) {
            if let Job::LoadLinks { context, slug } = job {
                let links = crate::ops::links::note_links(&app.journal.notes, &slug)
                    .unwrap_or_default();
                app.handle_outcome(crate::io::worker::Outcome::Links { context, links });
            }
        }
    }
}
