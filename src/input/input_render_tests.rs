//! Tests for input_render

use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use super::*;
use crate::test_utils::test_helpers::{connected_app, test_app};

fn render_field_to_buffer(app: &mut App, width: u16) -> Buffer {
    let backend = TestBackend::new(width, INPUT_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_field(app, f, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn render_field_to_string(app: &mut App, width: u16) -> String {
    let backend = TestBackend::new(width, INPUT_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_field(app, f, area);
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_empty_field_shows_placeholder() {
    let mut app = test_app();
    let output = render_field_to_string(&mut app, 60);

    assert!(output.contains("# "));
    assert!(output.contains(PLACEHOLDER));
    assert!(output.contains(" tapq "));
}

#[test]
fn test_field_shows_query() {
    let mut app = test_app();
    app.input.set_text("AAA bonds");

    let output = render_field_to_string(&mut app, 60);
    assert!(output.contains("# AAA bonds"));
}

#[test]
fn test_long_query_scrolls_to_cursor() {
    let mut app = test_app();
    app.input.set_text("abcdefghijklmnopqrstuvwxyz0123456789");

    let output = render_field_to_string(&mut app, 20);

    assert!(output.contains("789"));
    assert!(!output.contains("abc"));
    assert!(app.input.scroll_offset > 0);
}

#[test]
fn test_border_is_dimmed_while_closing() {
    let mut harness = connected_app();
    let now = Instant::now();
    harness.app.input.set_text("AAA bonds");
    harness.app.submit_query(now);

    let buffer = render_field_to_buffer(&mut harness.app, 40);
    assert_eq!(buffer[(0, 0)].fg, theme::input::BORDER);

    harness.app.input.set_text("BBB bonds");
    harness.app.submit_query(now);
    assert_eq!(
        harness.app.controller.current_state(),
        LifecycleState::Closing
    );

    let buffer = render_field_to_buffer(&mut harness.app, 40);
    assert_eq!(buffer[(0, 0)].fg, theme::input::BORDER_BUSY);
}

#[test]
fn test_returns_given_area() {
    let mut app = test_app();
    let backend = TestBackend::new(30, INPUT_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut returned = None;
    terminal
        .draw(|f| {
            let area = f.area();
            returned = Some((area, render_field(&mut app, f, area)));
        })
        .unwrap();

    let (area, field) = returned.unwrap();
    assert_eq!(area, field);
}

#[test]
fn test_visible_spans_cursor_inside_text() {
    let spans = visible_spans("hello", 0, 10, 1);
    let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(texts, vec!["h", "e", "llo"]);
}

#[test]
fn test_visible_spans_cursor_at_end() {
    let spans = visible_spans("hello", 0, 10, 5);
    let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(texts, vec!["hello", " "]);
}

#[test]
fn test_visible_spans_respects_offset() {
    let spans = visible_spans("hello world", 6, 5, 11);
    let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(texts, vec!["world", " "]);
}
