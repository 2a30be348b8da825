use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, View};

/// Key bindings for the current view, toggled with `?`
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay = centered_rect(60, 70, area);
    frame.render_widget(Clear, overlay);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let view_bindings: &[(&str, &str)] = match app.view {
        View::Tasks => &[
            ("j/k \u{2191}\u{2193}", "Move, across sections"),
            ("Enter/Space", "Fold or unfold sub-notes"),
            ("x", "Toggle done"),
        ],
        View::Log => &[
            ("j/k \u{2191}\u{2193}", "Move"),
            ("g/G", "Jump to top/bottom"),
            ("Enter/Space", "Fold or unfold sub-notes"),
        ],
        View::Notes => &[
            ("j/k \u{2191}\u{2193}", "Move"),
            ("Enter/Space", "Open note or fold section"),
            ("Backspace", "Previous note"),
        ],
    };
    let global: &[(&str, &str)] = &[
        ("1/2/3 Tab", "Switch view"),
        ("?", "Toggle this help"),
        ("q", "Quit"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(format!(" {}", app.view.label()), header_style)),
    ];
    lines.extend(view_bindings.iter().map(|b| binding(*b, key_style, desc_style)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Global", header_style)));
    lines.extend(global.iter().map(|b| binding(*b, key_style, desc_style)));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keys ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay,
    );
}

fn binding<'a>((key, desc): (&'a str, &'a str), key_style: Style, desc_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {key:<14}"), key_style),
        Span::styled(desc, desc_style),
    ])
}

/// A rectangle `percent_x` by `percent_y` of `area`, centered
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn lists_bindings_for_current_view() {
        let mut app = sample_app();
        app.view = View::Notes;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        assert!(output.contains("Backspace"));
        assert!(output.contains("Previous note"));
        assert!(output.contains("Toggle this help"));
        assert!(!output.contains("Toggle done"));
    }
}
