pub mod fit;
pub mod help_overlay;
pub mod log_view;
pub mod notes_view;
pub mod status_row;
pub mod tab_bar;
pub mod task_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use super::app::{App, View};
use super::theme::Theme;

/// Draw the whole screen. Views update their viewport height from the
/// area they are given, so this takes the app mutably.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tabs + separator
            Constraint::Min(1),
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);
    match app.view {
        View::Tasks => task_view::render_task_view(frame, app, chunks[1]),
        View::Log => log_view::render_log_view(frame, app, chunks[1]),
        View::Notes => notes_view::render_notes_view(frame, app, chunks[1]),
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    status_row::render_status_row(frame, app, chunks[2]);
}

/// `▶` collapsed, `▼` expanded, blank when there is nothing to fold
pub(super) fn collapse_glyph(has_children: bool, collapsed: bool) -> &'static str {
    match (has_children, collapsed) {
        (false, _) => " ",
        (true, true) => "\u{25B6}",
        (true, false) => "\u{25BC}",
    }
}

/// Fit a row to exactly `width` cells so the selection background spans
/// the line
pub(super) fn finish_line<'a>(
    spans: Vec<Span<'a>>,
    width: usize,
    selected: bool,
    theme: &Theme,
) -> Line<'a> {
    let fitted = fit::fit_spans(spans, width);
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    Line::from(fitted).style(Style::default().bg(bg))
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn glyphs() {
        assert_eq!(collapse_glyph(false, true), " ");
        assert_eq!(collapse_glyph(true, true), "\u{25B6}");
        assert_eq!(collapse_glyph(true, false), "\u{25BC}");
    }

    #[test]
    fn long_rows_are_cut_to_width() {
        let theme = Theme::default();
        let line = finish_line(
            vec![Span::raw("  "), Span::raw("Write the quarterly report")],
            12,
            false,
            &theme,
        );
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "  Write the\u{2026}");

        let line = finish_line(vec![Span::raw("ab")], 5, true, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "ab   ");
    }

    #[test]
    fn full_screen_shows_tabs_and_view() {
        let mut app = sample_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        let first = output.lines().next().unwrap();
        assert!(first.contains("Tasks"));
        assert!(first.contains("Notes"));
        assert!(output.contains("Today (1)"));
        assert!(output.contains("T-1 Write report"));
    }
}
