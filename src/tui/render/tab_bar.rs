use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

/// One tab per view, the current one highlighted, with a rule underneath
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for view in View::ALL {
        let style = if view == app.view {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        let label = match view {
            View::Tasks => format!(" {} {} ", view.label(), open_task_count(app)),
            _ => format!(" {} ", view.label()),
        };
        spans.push(Span::styled(label, style));
        spans.push(sep.clone());
    }

    let rule = Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    );
    let lines = vec![Line::from(spans), Line::from(rule)];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn open_task_count(app: &App) -> usize {
    app.tasks
        .nav
        .sections()
        .iter()
        .map(|s| s.items.len())
        .sum()
}
