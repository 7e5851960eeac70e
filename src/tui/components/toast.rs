//! Toast notifications
//!
//! Non-blocking overlays anchored at the last mouse position that
//! auto-dismiss after a short interval. Each toast is independent: several can
//! be on screen at once and each expires on its own clock.

use crate::scout::{Notify, Tone};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_millis(800);

/// Last known mouse position, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: u16,
    pub y: u16,
}

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub tone: Tone,
    /// Pointer position when the toast was raised
    pub anchor: PointerPosition,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, tone: Tone, anchor: PointerPosition) -> Self {
        Self::with_duration(message, tone, anchor, TOAST_DURATION)
    }

    pub fn with_duration(
        message: impl Into<String>,
        tone: Tone,
        anchor: PointerPosition,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            tone,
            anchor,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Screen rectangle for this toast: just below-right of the anchor,
    /// pushed down by `slot` rows of earlier toasts, clamped to `area`.
    pub fn placement(&self, area: Rect, slot: u16) -> Rect {
        let width = (self.message.width() as u16 + 4).min(area.width);
        let height = 3u16.min(area.height);

        let max_x = area.right().saturating_sub(width);
        let max_y = area.bottom().saturating_sub(height);
        let x = self.anchor.x.saturating_add(1).clamp(area.x, max_x.max(area.x));
        let y = self
            .anchor
            .y
            .saturating_add(1)
            .saturating_add(slot.saturating_mul(height))
            .clamp(area.y, max_y.max(area.y));

        Rect::new(x, y, width, height)
    }

    /// Render the toast on top of whatever is underneath
    pub fn render(&self, f: &mut Frame, area: Rect, slot: u16, theme: &Theme) {
        let toast_area = self.placement(area, slot);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.tone(self.tone)))
            .style(Style::default().bg(theme.bg));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.fg))
            .block(block);

        // Clear the area first so toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

/// All live toasts plus the pointer they anchor to
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    pointer: PointerPosition,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move. Called for every mouse event, unthrottled.
    pub fn set_pointer(&mut self, x: u16, y: u16) {
        self.pointer = PointerPosition { x, y };
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Drop expired toasts
    pub fn prune(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    #[cfg(test)]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Render every live toast; toasts sharing an anchor stack downward
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        for (i, toast) in self.toasts.iter().enumerate() {
            let slot = self.toasts[..i]
                .iter()
                .filter(|earlier| earlier.anchor == toast.anchor)
                .count() as u16;
            toast.render(f, area, slot, theme);
        }
    }
}

impl Notify for ToastStack {
    fn notify(&mut self, message: &str, tone: Tone) {
        self.push(Toast::new(message, tone, self.pointer()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_anchors_at_current_pointer() {
        let mut stack = ToastStack::new();
        stack.set_pointer(10, 4);
        stack.notify("Copied JSON to clipboard.", Tone::Info);
        stack.set_pointer(30, 12);
        stack.notify("Clipboard unavailable. Try downloading instead.", Tone::Error);

        let toasts = stack.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].anchor, PointerPosition { x: 10, y: 4 });
        assert_eq!(toasts[1].anchor, PointerPosition { x: 30, y: 12 });
        assert_eq!(toasts[1].tone, Tone::Error);
    }

    #[test]
    fn toasts_live_for_the_fixed_interval() {
        let toast = Toast::new("hi", Tone::Info, PointerPosition::default());
        assert_eq!(toast.duration, TOAST_DURATION);
        assert!(!toast.is_expired());
    }

    #[test]
    fn prune_removes_only_expired() {
        let mut stack = ToastStack::new();
        stack.push(Toast::with_duration(
            "old",
            Tone::Info,
            PointerPosition::default(),
            Duration::ZERO,
        ));
        stack.notify("fresh", Tone::Info);

        stack.prune();

        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].message, "fresh");
    }

    #[test]
    fn placement_stays_on_screen() {
        let area = Rect::new(0, 0, 40, 10);
        let toast = Toast::new("Copied JSON to clipboard.", Tone::Info, PointerPosition { x: 39, y: 9 });

        let placed = toast.placement(area, 0);

        assert!(placed.right() <= area.right());
        assert!(placed.bottom() <= area.bottom());
        assert_eq!(placed.height, 3);
    }

    #[test]
    fn later_toasts_stack_below_earlier_ones() {
        let area = Rect::new(0, 0, 80, 40);
        let toast = Toast::new("x", Tone::Info, PointerPosition { x: 5, y: 5 });

        assert_eq!(toast.placement(area, 0).y, 6);
        assert_eq!(toast.placement(area, 1).y, 9);
    }
}
