use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::controller::LifecycleState;
use crate::theme;

pub const PLACEHOLDER: &str = "Type a command or search";

/// Height of the search box including borders
pub const INPUT_HEIGHT: u16 = 3;

/// Visible part of `text` starting at char `offset`, `width` chars wide,
/// with the cursor drawn at `cursor` (relative to the whole text)
fn visible_spans(text: &str, offset: usize, width: usize, cursor: usize) -> Vec<Span<'static>> {
    let visible: Vec<char> = text.chars().skip(offset).take(width).collect();
    let cursor = cursor.saturating_sub(offset);
    let text_style = Style::default().fg(theme::input::TEXT);

    let before: String = visible.iter().take(cursor).collect();
    let mut spans = vec![Span::styled(before, text_style)];

    match visible.get(cursor) {
        Some(c) => {
            spans.push(Span::styled(c.to_string(), theme::input::CURSOR));
            let after: String = visible.iter().skip(cursor + 1).collect();
            spans.push(Span::styled(after, text_style));
        }
        None => spans.push(Span::styled(" ", theme::input::CURSOR)),
    }
    spans
}

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let viewport_width = area.width.saturating_sub(2) as usize;
    let prefix = "# ";
    let text_width = viewport_width.saturating_sub(prefix.len());
    app.input.calculate_scroll_offset(text_width);

    let border_color = match app.controller.current_state() {
        LifecycleState::Closing | LifecycleState::Submitting => theme::input::BORDER_BUSY,
        _ => theme::input::BORDER,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" tapq ")
        .border_style(Style::default().fg(border_color));

    let mut spans = vec![Span::styled(prefix, Style::default().fg(theme::input::ICON))];

    let query = app.input.query();
    if query.is_empty() {
        spans.push(Span::styled(" ", theme::input::CURSOR));
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme::input::PLACEHOLDER),
        ));
    } else {
        spans.extend(visible_spans(
            query,
            app.input.scroll_offset,
            text_width,
            app.input.cursor_column(),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
    area
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
