// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Dispatching lookups and feeding their outcomes back to the controller
// - Rendering the UI

pub mod app;
pub mod components;
pub mod layout;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::scout::{LookupClient, LookupError, LookupRequest, LookupResponse};
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Position;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// A finished lookup, tagged with the sequence number of its request
#[derive(Debug)]
pub struct LookupOutcome {
    pub seq: u64,
    pub result: Result<LookupResponse, LookupError>,
}

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);
    tracing::info!("Using lookup service at {}", app.client.base_url());
    tracing::info!("Exports go to {}", app.exporter.dir().display());

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Send a lookup on its own task; the outcome comes back over `tx`
fn spawn_lookup(client: LookupClient, request: LookupRequest, tx: mpsc::Sender<LookupOutcome>) {
    tokio::spawn(async move {
        let result = client.check(&request).await;
        if tx
            .send(LookupOutcome {
                seq: request.seq,
                result,
            })
            .await
            .is_err()
        {
            tracing::debug!(seq = request.seq, "UI gone before lookup finished");
        }
    });
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Terminal input (keyboard and mouse)
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Lookup outcomes from spawned requests
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<LookupOutcome>(16);
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => {
                            if let Some(request) = handle_key_event(app, key_event) {
                                spawn_lookup(app.client.clone(), request, outcome_tx.clone());
                            }
                        }
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(outcome) = outcome_rx.recv() => {
                app.controller.resolve(outcome.seq, outcome.result);
                app.settle_focus();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input. Returns a lookup to dispatch, if one was submitted.
///
/// Layered dispatch: global keys first, then the focused panel.
fn handle_key_event(app: &mut App, key_event: KeyEvent) -> Option<LookupRequest> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if handle_global_keys(app, &key_event) {
        return None;
    }

    match app.focus {
        Focus::Input => return handle_input_keys(app, &key_event),
        Focus::Results => match key_event.code {
            KeyCode::Down | KeyCode::Char('j') => app.select_next_row(),
            KeyCode::Up | KeyCode::Char('k') => app.select_prev_row(),
            KeyCode::Enter | KeyCode::Char('o') => app.open_selected_link(),
            _ => {}
        },
        Focus::Suggestions => match key_event.code {
            KeyCode::Right | KeyCode::Char('l') => app.select_next_chip(),
            KeyCode::Left | KeyCode::Char('h') => app.select_prev_chip(),
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('c') => {
                app.copy_selected_chip();
            }
            _ => {}
        },
    }
    None
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('y') if ctrl => {
            app.copy_json();
            true
        }
        KeyCode::Char('s') if ctrl => {
            app.download();
            true
        }
        KeyCode::Char('l') if ctrl => {
            app.toggle_logs();
            true
        }
        KeyCode::Tab => {
            app.focus_next();
            true
        }
        KeyCode::BackTab => {
            app.focus_prev();
            true
        }
        KeyCode::Esc => {
            // Esc steps back to the input, and quits from there
            if app.focus == Focus::Input {
                app.should_quit = true;
            } else {
                app.focus = Focus::Input;
            }
            true
        }
        _ => false,
    }
}

/// Editing keys for the username input
fn handle_input_keys(app: &mut App, key_event: &KeyEvent) -> Option<LookupRequest> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Enter => {
            let request = app.submit();
            app.settle_focus();
            return request;
        }
        KeyCode::Char('u') if ctrl => app.input.clear(),
        KeyCode::Char(c) if !ctrl => app.input.insert(c),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.left(),
        KeyCode::Right => app.input.right(),
        KeyCode::Home => app.input.home(),
        KeyCode::End => app.input.end(),
        _ => {}
    }
    None
}

/// Handle mouse input
///
/// Every event updates the pointer position that toasts anchor to.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let (x, y) = (mouse_event.column, mouse_event.row);
    app.toasts.set_pointer(x, y);

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.click_chip(x, y) {
                app.focus = Focus::Suggestions;
            } else if app.hit.input.contains(Position::new(x, y)) {
                app.focus = Focus::Input;
            }
        }
        MouseEventKind::ScrollUp => {
            if app.hit.results.contains(Position::new(x, y)) {
                app.select_prev_row();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.hit.results.contains(Position::new(x, y)) {
                app.select_next_row();
            }
        }
        _ => {}
    }
}
