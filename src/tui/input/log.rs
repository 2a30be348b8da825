use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::common::{is_activate, is_down, is_up};

pub(super) fn handle_log_key(app: &mut App, key: KeyEvent) {
    match key.code {
        c if is_down(c) => app.log.move_by(1),
        c if is_up(c) => app.log.move_by(-1),
        KeyCode::Char('g') | KeyCode::Home => app.log.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.log.select_last(),
        c if is_activate(c) => {
            app.log.toggle_collapse();
        }
        _ => {}
    }
}
