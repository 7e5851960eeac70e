//! Logs panel component
//!
//! Shows the most recent entries of the in-memory log buffer, color-coded by
//! level. Toggled with Ctrl+L.

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app
        .log_buffer
        .recent(visible)
        .into_iter()
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Error => theme.log_error,
                LogLevel::Warn => theme.log_warn,
                LogLevel::Info => theme.log_info,
                LogLevel::Debug | LogLevel::Trace => theme.log_debug,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(format!("{:<5} ", entry.level.as_str()), Style::default().fg(color)),
                Span::styled(entry.message, Style::default().fg(theme.fg)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" Logs ({}) ", app.log_buffer.len())),
    );
    f.render_widget(list, area);
}
