use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of at most `width` x `height` centred in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rect anchored to the top-right corner of `area`, `margin` cells in
pub fn top_right(area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width + margin),
        y: area.y + margin,
        width: width.min(area.width.saturating_sub(margin * 2)),
        height: height.min(area.height.saturating_sub(margin * 2)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
