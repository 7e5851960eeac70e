// Views module - screen-level rendering logic
//
// A single screen, stacked top to bottom:
// title, username input, error slot, results, suggestions, logs, status.
// Toasts are drawn last so they sit above everything else.

use super::app::App;
use super::components::{
    input_bar, logs_panel, results_table, status_bar, suggestions_panel, title_bar,
};
use crate::scout::UiState;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Height of the logs panel when shown
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.bg));
    f.render_widget(bg_block, f.area());

    let ui = app.controller.affordances();
    let model = app.controller.render_model().cloned();
    let error = app.controller.error_message().map(str::to_string);

    let chips = match &model {
        Some(m) if ui.suggestions_visible => m.chips.clone(),
        _ => Vec::new(),
    };
    let chip_lines = suggestions_panel::lines_needed(&chips, f.area().width.saturating_sub(2));

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(3)];
    if error.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(4));
    if !chips.is_empty() {
        constraints.push(Constraint::Length(chip_lines.min(4) + 2));
    }
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());
    let mut slots = chunks.iter().copied();
    let mut next = || slots.next().unwrap_or_default();

    title_bar::render(f, next(), app);
    input_bar::render(f, next(), app);

    if let Some(message) = &error {
        let line = Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.error),
        ));
        f.render_widget(Paragraph::new(line), next());
    }

    let body = next();
    match &model {
        Some(model) if ui.results_visible => results_table::render(f, body, app, model),
        _ => {
            app.hit.results = Rect::default();
            render_placeholder(f, body, app);
        }
    }

    if chips.is_empty() {
        app.hit.chips.clear();
    } else {
        suggestions_panel::render(f, next(), app, &chips);
    }

    if app.show_logs {
        logs_panel::render(f, next(), app);
    }

    status_bar::render(f, next(), app);

    app.toasts.prune();
    if !app.toasts.is_empty() {
        app.toasts.render(f, f.area(), &app.theme);
    }
}

/// Body shown before the first result, while the first lookup runs, or
/// after a failure
fn render_placeholder(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = match app.controller.state() {
        UiState::Loading => format!("{} Checking platforms…", app.spinner_char()),
        UiState::Error => "Fix the username and press Enter to try again.".to_string(),
        _ => "Type a username and press Enter to check where it is free.".to_string(),
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Results "),
        );
    f.render_widget(paragraph, area);
}
