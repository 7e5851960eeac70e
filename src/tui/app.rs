// TUI application state
//
// Owns the interaction controller and everything the event loop needs to act
// on it: the lookup client, clipboard, exporter, input line, focus and the
// toast stack that notifications land in.

use super::components::{InputLine, ToastStack};
use super::theme::Theme;
use crate::clipboard::ClipboardService;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::scout::{Controller, Exporter, LookupClient, LookupRequest, Notify, Tone};
use ratatui::layout::{Position, Rect};

/// Panels that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Results,
    Suggestions,
}

/// Screen areas recorded while drawing, used for mouse hit testing
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub input: Rect,
    pub results: Rect,
    pub chips: Vec<Rect>,
}

impl HitAreas {
    /// Index of the chip under (x, y)
    pub fn chip_at(&self, x: u16, y: u16) -> Option<usize> {
        let pos = Position::new(x, y);
        self.chips.iter().position(|r| r.contains(pos))
    }
}

/// Main application state for the TUI
pub struct App {
    pub controller: Controller,
    pub client: LookupClient,
    pub clipboard: ClipboardService,
    pub exporter: Exporter,

    /// Username being edited
    pub input: InputLine,
    pub focus: Focus,

    /// Highlighted results row (when Results is focused)
    pub selected_row: usize,
    /// Highlighted suggestion chip (when Suggestions is focused)
    pub selected_chip: usize,

    pub hit: HitAreas,
    pub toasts: ToastStack,

    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,
    pub show_logs: bool,

    pub theme: Theme,
    pub should_quit: bool,

    /// Animation frame counter for the loading spinner
    pub animation_frame: usize,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        Self::with_parts(
            LookupClient::new(config.api_url.clone()),
            ClipboardService::from_config(&config.clipboard),
            Exporter::new(config.download_dir.clone()),
            super::theme::ThemeKind::from_name(&config.theme).theme(),
            log_buffer,
        )
    }

    pub fn with_parts(
        client: LookupClient,
        clipboard: ClipboardService,
        exporter: Exporter,
        theme: Theme,
        log_buffer: LogBuffer,
    ) -> Self {
        Self {
            controller: Controller::new(),
            client,
            clipboard,
            exporter,
            input: InputLine::default(),
            focus: Focus::Input,
            selected_row: 0,
            selected_chip: 0,
            hit: HitAreas::default(),
            toasts: ToastStack::new(),
            log_buffer,
            show_logs: false,
            theme,
            should_quit: false,
            animation_frame: 0,
        }
    }

    /// Submit the current input. Returns the request the caller must send.
    pub fn submit(&mut self) -> Option<LookupRequest> {
        let request = self.controller.submit(self.input.text())?;
        self.selected_row = 0;
        self.selected_chip = 0;
        Some(request)
    }

    fn row_count(&self) -> usize {
        self.controller.render_model().map_or(0, |m| m.rows.len())
    }

    fn chip_count(&self) -> usize {
        if !self.controller.affordances().suggestions_visible {
            return 0;
        }
        self.controller.render_model().map_or(0, |m| m.chips.len())
    }

    /// Focus targets that currently have something to show
    fn focus_ring(&self) -> Vec<Focus> {
        let ui = self.controller.affordances();
        let mut ring = vec![Focus::Input];
        if ui.results_visible && self.row_count() > 0 {
            ring.push(Focus::Results);
        }
        if self.chip_count() > 0 {
            ring.push(Focus::Suggestions);
        }
        ring
    }

    pub fn focus_next(&mut self) {
        let ring = self.focus_ring();
        let at = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = ring[(at + 1) % ring.len()];
    }

    pub fn focus_prev(&mut self) {
        let ring = self.focus_ring();
        let at = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = ring[(at + ring.len() - 1) % ring.len()];
    }

    /// Put focus back on the input if the focused panel has gone away
    pub fn settle_focus(&mut self) {
        if !self.focus_ring().contains(&self.focus) {
            self.focus = Focus::Input;
        }
        self.selected_row = self.selected_row.min(self.row_count().saturating_sub(1));
        self.selected_chip = self.selected_chip.min(self.chip_count().saturating_sub(1));
    }

    pub fn select_next_row(&mut self) {
        if self.selected_row + 1 < self.row_count() {
            self.selected_row += 1;
        }
    }

    pub fn select_prev_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn select_next_chip(&mut self) {
        if self.selected_chip + 1 < self.chip_count() {
            self.selected_chip += 1;
        }
    }

    pub fn select_prev_chip(&mut self) {
        self.selected_chip = self.selected_chip.saturating_sub(1);
    }

    pub fn copy_json(&mut self) -> bool {
        self.controller
            .copy_json(&mut self.clipboard, &mut self.toasts)
    }

    pub fn copy_chip(&mut self, index: usize) -> bool {
        self.controller
            .copy_suggestion(index, &mut self.clipboard, &mut self.toasts)
    }

    pub fn copy_selected_chip(&mut self) -> bool {
        self.copy_chip(self.selected_chip)
    }

    pub fn download(&mut self) {
        self.controller.download_json(&self.exporter, &mut self.toasts);
    }

    /// Open the selected row's profile link in the system browser.
    ///
    /// The browser runs detached: a new top-level context with no handle back
    /// to this process and no referrer.
    pub fn open_selected_link(&mut self) {
        let Some(link) = self.controller.link_for_row(self.selected_row) else {
            return;
        };
        let url = link.href.clone();
        tracing::debug!(target_ctx = link.target(), rel = link.rel(), "Opening {}", url);

        if let Err(e) = open::that_detached(&url) {
            tracing::warn!("Could not open {}: {}", url, e);
            self.toasts
                .notify(&format!("Could not open {}", url), Tone::Error);
        }
    }

    /// Copy the chip under the pointer, if any. Returns whether a chip was hit.
    pub fn click_chip(&mut self, x: u16, y: u16) -> bool {
        match self.hit.chip_at(x, y) {
            Some(index) if index < self.chip_count() => {
                self.selected_chip = index;
                self.copy_chip(index);
                true
            }
            _ => false,
        }
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}
