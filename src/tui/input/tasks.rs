use crossterm::event::{KeyCode, KeyEvent};

use crate::io::worker::Job;
use crate::tui::app::App;

use super::common::{is_activate, is_down, is_up};

pub(super) fn handle_tasks_key(app: &mut App, key: KeyEvent) {
    match key.code {
        c if is_down(c) => app.tasks.move_down(),
        c if is_up(c) => app.tasks.move_up(),
        c if is_activate(c) => {
            app.tasks.toggle_collapse();
        }
        KeyCode::Char('x') => toggle_done(app),
        _ => {}
    }
}

fn toggle_done(app: &mut App) {
    let Some(item) = app.tasks.nav.selected_item() else {
        return;
    };
    let id = item.id.clone();
    match app.tasks.toggle_done() {
        Some(change) => {
            tracing::info!(id = %change.id, status = %change.status, "status change requested");
            app.outbox.push(Job::SetStatus(change));
        }
        None => app.status_message = Some(format!("{id} is still saving")),
    }
}
