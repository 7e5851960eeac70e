// Status bar component
//
// Key hints; export hints are dimmed while there is nothing to export.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let ui = app.controller.affordances();
    let wide = Breakpoint::from_width(area.width) == Breakpoint::Wide;

    let enabled = Style::default().fg(theme.status_bar);
    let disabled = Style::default()
        .fg(theme.muted)
        .add_modifier(Modifier::DIM);
    let export_style = if ui.export_enabled { enabled } else { disabled };

    let mut spans = vec![
        Span::styled(" Tab focus", enabled),
        Span::raw(" │ "),
        Span::styled("^Y copy JSON", export_style),
        Span::raw(" │ "),
        Span::styled("^S save JSON", export_style),
    ];
    if wide {
        spans.extend([
            Span::raw(" │ "),
            Span::styled("^L logs", enabled),
            Span::raw(" │ "),
            Span::styled("^C quit", enabled),
            Span::raw(" │ "),
            Span::styled(
                format!("state: {}", app.controller.state().name()),
                Style::default().fg(theme.muted),
            ),
        ]);
    }

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}
