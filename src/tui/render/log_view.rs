use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::outline::FlatNode;
use crate::tui::app::App;

use super::{collapse_glyph, finish_line};

pub fn render_log_view(frame: &mut Frame, app: &mut App, area: Rect) {
    app.log.set_height(area.height as usize);
    let theme = &app.theme;
    let state = &app.log;
    let width = area.width as usize;
    let text = Style::default().fg(theme.text);
    let dim = Style::default().fg(theme.dim);

    let nodes = state.cursor.nodes();
    let lines: Vec<Line> = if nodes.is_empty() {
        vec![Line::from(Span::styled("  (no log entries)", dim))]
    } else {
        let range = state.viewport.range(nodes.len());
        let start = range.start;
        nodes[range]
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let mut spans = Vec::new();
                match node {
                    FlatNode::Parent { id } => {
                        let entry = state.entry(id);
                        let glyph = collapse_glyph(
                            entry.is_some_and(|e| e.has_children()),
                            state.collapse.is_collapsed(id),
                        );
                        spans.push(Span::styled(format!("  {glyph} "), dim));
                        if !id.is_positional() {
                            spans.push(Span::styled(format!("{id} "), dim));
                        }
                        let body = entry.map(|e| e.text.clone()).unwrap_or_default();
                        spans.push(Span::styled(body, text));
                    }
                    FlatNode::Child { id, parent } => {
                        let note = state
                            .entry(parent)
                            .and_then(|e| e.child(id))
                            .map(|c| c.text.clone())
                            .unwrap_or_default();
                        spans.push(Span::styled(format!("      - {note}"), text));
                    }
                }
                let selected = state.cursor.selected_index() == Some(start + i);
                finish_line(spans, width, selected, theme)
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.background)),
        area,
    );
}
