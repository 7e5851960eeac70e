//! Results table
//!
//! One row per platform: name, status (colored by availability), link label
//! and notes. Columns drop away on narrow terminals.

use crate::scout::render::{LinkCell, RenderModel};
use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App, model: &RenderModel) {
    app.hit.results = area;
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);
    let focused = app.focus == Focus::Results;

    let mut header = vec!["Platform", "Status"];
    let mut widths = vec![Constraint::Length(16), Constraint::Length(11)];
    if bp.show_link() {
        header.push("Link");
        widths.push(Constraint::Length(7));
    }
    if bp.show_notes() {
        header.push("Notes");
        widths.push(Constraint::Min(10));
    }

    let rows = model.rows.iter().map(|row| {
        let mut cells = vec![
            Cell::from(row.platform.as_str()),
            Cell::from(row.status_label.as_str())
                .style(Style::default().fg(theme.status(row.style_class))),
        ];
        if bp.show_link() {
            let style = match row.link {
                LinkCell::External(_) => Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::UNDERLINED),
                LinkCell::Placeholder => Style::default().fg(theme.muted),
            };
            cells.push(Cell::from(row.link.label()).style(style));
        }
        if bp.show_notes() {
            cells.push(Cell::from(row.notes.as_str()).style(Style::default().fg(theme.muted)));
        }
        Row::new(cells)
    });

    let (available, taken, unknown) = model.tally();
    let title = format!(
        " Results for {} · ✓ {} ✗ {} ? {} ",
        model.username, available, taken, unknown
    );
    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title);
    if focused {
        block = block.title_bottom(Line::from(" Enter: open link ").right_aligned());
    }

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(block)
        .style(Style::default().fg(theme.fg))
        .row_highlight_style(
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg),
        );

    let mut state = TableState::default();
    if focused && !model.rows.is_empty() {
        state.select(Some(app.selected_row.min(model.rows.len() - 1)));
    }
    f.render_stateful_widget(table, area, &mut state);
}
