// Title bar component
//
// App name, version and a spinner while a lookup is in flight.

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(
            " Handle Scout",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" v{}", VERSION), Style::default().fg(theme.muted)),
    ];

    if let Some(last) = app.controller.last_response() {
        spans.push(Span::styled(
            format!("  · {} platforms for {}", last.results.len(), last.username),
            Style::default().fg(theme.muted),
        ));
    }

    if app.controller.affordances().loading_visible {
        spans.push(Span::styled(
            format!("  {} checking", app.spinner_char()),
            Style::default().fg(theme.unknown),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
