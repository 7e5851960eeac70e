//! Suggestion chips
//!
//! Each alternate name is a chip; clicking it (or Enter while selected)
//! copies the chip text. Chip rectangles are recorded for mouse hit testing.

use crate::scout::render::SuggestionChip;
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Gap between chips, in cells
const CHIP_GAP: u16 = 1;

fn chip_width(chip: &SuggestionChip) -> u16 {
    chip.text.width() as u16 + 2
}

/// Lay chips out left to right, wrapping inside `inner`. Chips that do not
/// fit vertically are left out.
pub fn layout_chips(chips: &[SuggestionChip], inner: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(chips.len());
    let (mut x, mut y) = (inner.x, inner.y);

    for chip in chips {
        let width = chip_width(chip).min(inner.width);
        if x > inner.x && x + width > inner.right() {
            x = inner.x;
            y += 1;
        }
        if y >= inner.bottom() {
            break;
        }
        rects.push(Rect::new(x, y, width, 1));
        x += width + CHIP_GAP;
    }
    rects
}

/// Number of chip lines needed at `width` (inner width)
pub fn lines_needed(chips: &[SuggestionChip], width: u16) -> u16 {
    let unbounded = Rect::new(0, 0, width, u16::MAX);
    layout_chips(chips, unbounded)
        .last()
        .map(|r| r.y + 1)
        .unwrap_or(0)
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App, chips: &[SuggestionChip]) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Suggestions;

    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Suggestions ")
        .title_bottom(Line::from(" click or Enter to copy ").right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rects = layout_chips(chips, inner);
    for (i, (chip, rect)) in chips.iter().zip(&rects).enumerate() {
        let selected = focused && i == app.selected_chip;
        let style = if selected {
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.title).add_modifier(Modifier::REVERSED)
        };
        f.render_widget(Paragraph::new(format!(" {} ", chip.text)).style(style), *rect);
    }

    app.hit.chips = rects;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chips(names: &[&str]) -> Vec<SuggestionChip> {
        names
            .iter()
            .map(|n| SuggestionChip {
                text: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn chips_flow_left_to_right() {
        let rects = layout_chips(&chips(&["abhq", "ab_dev"]), Rect::new(1, 1, 40, 2));

        assert_eq!(rects[0], Rect::new(1, 1, 6, 1));
        assert_eq!(rects[1], Rect::new(8, 1, 8, 1));
    }

    #[test]
    fn chips_wrap_and_clip() {
        let list = chips(&["aaaaaaaa", "bbbbbbbb", "cccccccc"]);

        let rects = layout_chips(&list, Rect::new(0, 0, 20, 1));
        assert_eq!(rects.len(), 1);

        let rects = layout_chips(&list, Rect::new(0, 0, 20, 5));
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[1].y, 1);
        assert_eq!(lines_needed(&list, 20), 3);
    }

    #[test]
    fn no_chips_need_no_lines() {
        assert_eq!(lines_needed(&[], 80), 0);
    }
}
