//! Vertical scrollbar drawn on the right border of a scrollable card

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::scroll::ScrollState;

/// Render a scrollbar for `scroll` on the right border of `area`.
///
/// Nothing is drawn while the content fits the viewport.
pub fn render_vertical_scrollbar(frame: &mut Frame, area: Rect, scroll: &ScrollState, color: Color) {
    if scroll.max_offset == 0 || scroll.viewport_height == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color));

    // Ratatui uses max_position = content_length - 1 for thumb positioning,
    // so content_length = max_offset + 1 puts the thumb at the bottom at max scroll
    let max_offset = scroll.max_offset as usize;
    let mut state = ScrollbarState::new(max_offset + 1)
        .position((scroll.offset as usize).min(max_offset))
        .viewport_content_length(scroll.viewport_height as usize);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
