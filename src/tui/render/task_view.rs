use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::outline::FlatNode;
use crate::tui::app::App;
use crate::tui::state::TaskRow;

use super::{collapse_glyph, finish_line};

/// Render the grouped task list: section headers with counts, task rows
/// with status boxes (pending changes in the pending color) and sub-notes.
pub fn render_task_view(frame: &mut Frame, app: &mut App, area: Rect) {
    app.tasks.set_height(area.height as usize);
    let app = &*app;
    let theme = &app.theme;
    let state = &app.tasks;
    let width = area.width as usize;
    let selected = state.nav.selected_index();

    let header_style = Style::default()
        .fg(theme.text_bright)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(theme.dim);

    let rows = state.rows();
    let lines: Vec<Line> = rows[state.viewport.range(rows.len())]
        .iter()
        .map(|row| match *row {
            TaskRow::Header(i) => {
                let section = &state.nav.sections()[i];
                let title = format!("{} ({})", section.name, section.items.len());
                finish_line(vec![Span::styled(title, header_style)], width, false, theme)
            }
            TaskRow::Placeholder(_) => {
                finish_line(vec![Span::styled("  (none)", dim)], width, false, theme)
            }
            TaskRow::Node(index) => node_line(app, index, selected == Some(index), width),
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.background)),
        area,
    );
}

fn node_line(app: &App, index: usize, selected: bool, width: usize) -> Line<'static> {
    let theme = &app.theme;
    let state = &app.tasks;
    let text = Style::default().fg(theme.text);
    let dim = Style::default().fg(theme.dim);
    let mut spans = Vec::new();

    match &state.nav.nodes()[index] {
        FlatNode::Parent { id } => {
            if let Some(item) = state.nav.item(id) {
                let glyph = collapse_glyph(item.has_children(), state.collapse.is_collapsed(id));
                spans.push(Span::styled(format!("  {glyph} "), dim));
                if let Some(status) = state.display_status(item) {
                    let color = theme.status_color(status, state.is_pending(id));
                    spans.push(Span::styled(
                        format!("[{}]", status.checkbox_char()),
                        Style::default().fg(color),
                    ));
                    spans.push(Span::raw(" "));
                }
                if !id.is_positional() {
                    spans.push(Span::styled(format!("{id} "), dim));
                }
                spans.push(Span::styled(item.text.clone(), text));
            }
        }
        FlatNode::Child { id, parent } => {
            let note = state
                .nav
                .item(parent)
                .and_then(|p| p.child(id))
                .map(|c| c.text.as_str())
                .unwrap_or_default();
            spans.push(Span::styled(format!("      - {note}"), text));
        }
    }
    finish_line(spans, width, selected, theme)
}
