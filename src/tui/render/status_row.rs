use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

fn key_hints(view: View) -> &'static str {
    match view {
        View::Tasks => "j/k move  enter fold  x done  ? help  q quit",
        View::Log => "j/k move  g/G top/bottom  enter fold  ? help  q quit",
        View::Notes => "j/k move  enter open/fold  bksp back  ? help  q quit",
    }
}

/// Bottom row: the last message, else a loading note, else key hints when
/// enabled in config
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let span = if let Some(message) = &app.status_message {
        Span::styled(message.clone(), Style::default().fg(app.theme.highlight))
    } else if app.view == View::Notes && app.notes.is_loading() {
        Span::styled("loading links\u{2026}", Style::default().fg(app.theme.dim))
    } else if app.journal.config.ui.show_key_hints {
        Span::styled(key_hints(app.view), Style::default().fg(app.theme.dim))
    } else {
        Span::raw("")
    };
    frame.render_widget(
        Paragraph::new(Line::from(span)).style(Style::default().bg(bg)),
        area,
    );
}
