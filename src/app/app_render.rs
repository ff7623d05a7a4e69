use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::input::input_render::{INPUT_HEIGHT, render_field};
use crate::notification::render_notification;
use crate::widgets::popup;

/// Widest the centred search box gets before the first search
const CENTERED_INPUT_WIDTH: u16 = 72;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(INPUT_HEIGHT), Constraint::Length(1)])
                .split(frame.area());
        let (body, help_area) = (layout[0], layout[1]);

        if self.controller.has_results_surface() {
            // Search box docked at the top, card below
            let layout = Layout::vertical([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)])
                .split(body);
            render_field(self, frame, layout[0]);
            crate::results::results_render::render_card(self, frame, layout[1]);
        } else {
            let width = body.width.saturating_sub(4).min(CENTERED_INPUT_WIDTH);
            let input_area = popup::centered(body, width, INPUT_HEIGHT);
            render_field(self, frame, input_area);
        }

        crate::help::help_line_render::render_line(self, frame, help_area);

        render_notification(frame, &self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
