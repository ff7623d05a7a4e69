use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::controller::LifecycleState;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.controller.current_state() {
        LifecycleState::AwaitingResponse | LifecycleState::Revealing => {
            hints!["Enter" => "New search", "Esc" => "Cancel", "Ctrl+C" => "Quit"]
        }
        _ if app.controller.has_results_surface() => {
            hints!["Enter" => "Search", "Esc" => "Clear search", "↑/↓" => "Scroll", "PgUp/PgDn" => "Page", "Ctrl+C" => "Quit"]
        }
        _ => hints!["Enter" => "Search", "Esc" => "Clear", "Ctrl+C" => "Quit"],
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let label = format!("{} ", app.service_label);
    let label_width = label.chars().count() as u16;
    let layout =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(label_width)]).split(area);

    let hints = get_context_hints(app);
    frame.render_widget(Paragraph::new(Line::from(build_styled_spans(&hints))), layout[0]);

    let service = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(theme::help_line::SERVICE),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(service, layout[1]);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
