use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::blocks::{BlockKind, classify};
use crate::app::App;
use crate::controller::{AnimationPhase, ContentKind, ControllerSnapshot};
use crate::theme;
use crate::widgets::scrollbar;

pub const REVEAL_CURSOR: &str = "▌";
const STATUS_ICON: &str = "⏳ ";
const BULLET: &str = "• ";

/// Wrap text to fit `max_width` display columns.
///
/// Breaks at whitespace where it can and splits words wider than the line.
/// Whitespace inside a line is kept as is (tables, indentation); whitespace
/// at a wrap point is dropped. A trailing space on the last line is kept so a
/// partially revealed word starts where it will end up.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    // Just wrapped: leading whitespace of the new line is the break itself
    let mut at_break = false;

    for (is_space, token) in tokens(text) {
        let width = token.width();

        if is_space {
            if at_break {
                continue;
            }
            if current_width + width <= max_width {
                current.push_str(token);
                current_width += width;
            } else {
                push_line(&mut lines, &mut current, &mut current_width);
                at_break = true;
            }
            continue;
        }

        at_break = false;
        if current_width + width <= max_width {
            current.push_str(token);
            current_width += width;
            continue;
        }

        if !current.trim().is_empty() {
            push_line(&mut lines, &mut current, &mut current_width);
        }
        if width <= max_width.saturating_sub(current_width) {
            current.push_str(token);
            current_width += width;
            continue;
        }

        // Wider than a line: split at column boundaries
        for c in token.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width > max_width && current_width > 0 {
                push_line(&mut lines, &mut current, &mut current_width);
            }
            current.push(c);
            current_width += char_width;
        }
    }

    // Whitespace that only caused a break does not open a new line
    if !(at_break && current.is_empty()) || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split into alternating whitespace / non-whitespace runs
fn tokens(text: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (i, c) in text.char_indices() {
        let is_space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != is_space => {
                runs.push((prev, &text[start..i]));
                start = i;
            }
            _ => {}
        }
        in_space = Some(is_space);
    }
    if let Some(is_space) = in_space {
        runs.push((is_space, &text[start..]));
    }
    runs
}

fn push_line(lines: &mut Vec<String>, current: &mut String, current_width: &mut usize) {
    let trimmed_len = current.trim_end().len();
    current.truncate(trimmed_len);
    lines.push(std::mem::take(current));
    *current_width = 0;
}

fn block_style(kind: BlockKind, content: ContentKind) -> Style {
    if content == ContentKind::Failure {
        return Style::default().fg(theme::results::FAILURE_TEXT);
    }
    match kind {
        BlockKind::Heading1 => theme::results::HEADING1,
        BlockKind::Heading2 => theme::results::HEADING2,
        BlockKind::ListItem | BlockKind::Paragraph => {
            Style::default().fg(theme::results::PARAGRAPH)
        }
    }
}

/// Styled, wrapped lines for the revealed part of the answer
fn answer_lines(revealed: &str, content: ContentKind, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in classify(revealed) {
        let style = block_style(block.kind, content);

        if block.kind == BlockKind::ListItem {
            let bullet_style = Style::default().fg(theme::results::LIST_BULLET);
            let wrapped = wrap_text(block.text, width.saturating_sub(BULLET.width()));
            for (i, part) in wrapped.into_iter().enumerate() {
                let lead = if i == 0 { BULLET } else { "  " };
                lines.push(Line::from(vec![
                    Span::styled(lead, bullet_style),
                    Span::styled(part, style),
                ]));
            }
        } else {
            for part in wrap_text(block.text, width) {
                lines.push(Line::from(Span::styled(part, style)));
            }
        }
    }

    // `lines()` drops the empty line after a trailing newline; the cursor
    // belongs there
    if revealed.is_empty() || revealed.ends_with('\n') {
        lines.push(Line::default());
    }
    lines
}

/// Card body for the current snapshot
pub fn build_content(snapshot: &ControllerSnapshot<'_>, width: u16) -> Text<'static> {
    if let Some(message) = snapshot.status_message {
        return Text::from(Line::from(vec![
            Span::styled(STATUS_ICON, Style::default().fg(theme::results::STATUS_ICON)),
            Span::styled(message.to_string(), theme::results::STATUS_TEXT),
        ]));
    }

    let mut lines = answer_lines(snapshot.revealed, snapshot.content_kind, width as usize);

    if snapshot.revealing {
        let cursor = Span::styled(
            REVEAL_CURSOR,
            Style::default().fg(theme::results::REVEAL_CURSOR),
        );
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    } else if lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }

    Text::from(lines)
}

fn border_color(snapshot: &ControllerSnapshot<'_>) -> Color {
    match snapshot.content_kind {
        ContentKind::Failure => theme::results::BORDER_FAILURE,
        ContentKind::Answer => theme::results::BORDER,
    }
}

/// Draw the results card; returns its rect, or None when there is no card
pub fn render_card(app: &mut App, frame: &mut Frame, area: Rect) -> Option<Rect> {
    if !app.controller.has_results_surface() || area.height < 3 {
        return None;
    }

    let snapshot = app.controller.snapshot();
    let color = border_color(&snapshot);
    let title = format!(" # {} ", snapshot.query.unwrap_or_default());

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(title, theme::results::TITLE)))
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme::results::BACKGROUND));

    if snapshot.status_message.is_none() {
        let hints = theme::border_hints::build_hints(
            &[("Esc", "Clear search"), ("↑/↓", "Scroll")],
            theme::results::HINT,
        );
        block = block.title_bottom(hints.alignment(Alignment::Right));
    }

    let inner_width = area.width.saturating_sub(2);
    let viewport_height = area.height.saturating_sub(2);
    let content = build_content(&snapshot, inner_width);

    let mut style = Style::default();
    if snapshot.phase != AnimationPhase::Steady {
        style = style.add_modifier(theme::results::TRANSITION_MODIFIER);
    }

    app.results_scroll
        .update_bounds(content.lines.len() as u32, viewport_height);

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(style)
        .scroll((app.results_scroll.offset, 0));
    frame.render_widget(paragraph, area);

    scrollbar::render_vertical_scrollbar(frame, area, &app.results_scroll, color);

    Some(area)
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
