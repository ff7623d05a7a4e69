use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;

/// Render the notification overlay in the top-right corner of the frame.
///
/// Call after the rest of the UI so it is drawn on top.
pub fn render_notification(frame: &mut Frame, notification: &NotificationState) -> Option<Rect> {
    let notif = notification.current()?;
    let message = &notif.message;
    let style = notif.style;

    // 1 space of padding each side plus borders
    let content_width = message.chars().count() as u16;
    let area = popup::top_right(frame.area(), content_width + 4, 3, MARGIN);

    if area.width < 5 || area.height < 3 {
        return None;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
    Some(area)
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
