use crossterm::event::{KeyCode, KeyEvent};

use crate::outline::Activation;
use crate::tui::app::App;

use super::common::{is_activate, is_down, is_up};

pub(super) fn handle_notes_key(app: &mut App, key: KeyEvent) {
    match key.code {
        c if is_down(c) => app.notes.links.move_down(),
        c if is_up(c) => app.notes.links.move_up(),
        c if is_activate(c) => match app.notes.links.activate() {
            Activation::Navigate(target) => app.follow_note(&target.slug),
            Activation::Toggled { .. } | Activation::Nothing => {}
        },
        KeyCode::Backspace => match app.notes.back() {
            Some(slug) => app.open_note(&slug),
            None => app.status_message = Some("no earlier note".into()),
        },
        _ => {}
    }
}
