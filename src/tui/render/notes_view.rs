use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::outline::{LinkLine, LinkSection};
use crate::tui::app::App;

use super::finish_line;

/// Title of the open note, then its outgoing links and backlinks as two
/// collapsible sections.
pub fn render_notes_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.clone();
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    if app.notes.current().is_none() {
        lines.push(Line::from(Span::styled(
            "  no notes yet: add markdown files to daybook/notes/",
            Style::default().fg(theme.dim),
        )));
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme.background)),
            area,
        );
        return;
    }

    lines.push(Line::from(Span::styled(
        app.notes.title().to_string(),
        Style::default()
            .fg(theme.text_bright)
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(error) = app.notes.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(theme.red),
        )));
    }

    let reserved = lines.len();
    app.notes
        .links
        .set_height((area.height as usize).saturating_sub(reserved));

    let cursor = &app.notes.links;
    let visible = cursor.visible_lines();
    let selected_row = cursor.display_row();
    let range = cursor.viewport().range(visible.len());
    let start = range.start;
    let dim = Style::default().fg(theme.dim);
    let text = Style::default().fg(theme.text);

    for (i, line) in visible[range].iter().enumerate() {
        let spans = match *line {
            LinkLine::Header(section) => {
                let glyph = if cursor.is_collapsed(section) {
                    "\u{25B6}"
                } else {
                    "\u{25BC}"
                };
                vec![Span::styled(
                    format!(
                        "{glyph} {} ({})",
                        section.label(),
                        cursor.records(section).len()
                    ),
                    Style::default()
                        .fg(theme.text_bright)
                        .add_modifier(Modifier::BOLD),
                )]
            }
            LinkLine::Empty(_) => vec![Span::styled("  (none)", dim)],
            LinkLine::Row { section, .. } => match cursor.record(*line) {
                Some(record) => {
                    let (arrow, other) = match section {
                        LinkSection::Outgoing => ("\u{2192}", &record.target),
                        LinkSection::Backlinks => ("\u{2190}", &record.source),
                    };
                    let style = if record.resolved {
                        Style::default().fg(theme.cyan)
                    } else {
                        Style::default().fg(theme.red)
                    };
                    let mut spans = vec![
                        Span::styled(format!("  {arrow} "), dim),
                        Span::styled(other.slug.clone(), style),
                    ];
                    if !record.resolved {
                        spans.push(Span::styled(" (missing)", dim));
                    }
                    spans.push(Span::styled(format!("  {}", record.context), text));
                    spans
                }
                None => Vec::new(),
            },
        };
        lines.push(finish_line(spans, width, start + i == selected_row, &theme));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.background)),
        area,
    );
}
