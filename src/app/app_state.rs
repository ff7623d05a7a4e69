use std::time::Instant;

use crate::config::Config;
use crate::controller::{ControllerError, ControllerSettings, QueryController};
use crate::input::InputState;
use crate::notification::{NotificationState, NotificationType};
use crate::scroll::ScrollState;

pub struct App {
    pub input: InputState,
    pub controller: QueryController,
    pub results_scroll: ScrollState,
    pub notification: NotificationState,
    /// Where answers come from, shown in the help line
    pub service_label: String,
    pub should_quit: bool,
    pub needs_render: bool,
    /// Request whose failure detail is already in a notification
    pub(super) reported_failure: Option<u64>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, ControllerError> {
        let controller = QueryController::new(ControllerSettings::from_config(config))?;
        let service_label = if config.service.offline {
            "offline".to_string()
        } else {
            config.service.url.clone()
        };

        Ok(Self {
            input: InputState::new(),
            controller,
            results_scroll: ScrollState::new(),
            notification: NotificationState::new(),
            service_label,
            should_quit: false,
            needs_render: true,
            reported_failure: None,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    /// Submit the search box text.
    ///
    /// Blank text is ignored. The text stays in the box so it can be edited
    /// and resubmitted.
    pub fn submit_query(&mut self, now: Instant) {
        let query = self.input.query().to_string();
        if self.controller.submit(&query, now).is_err() {
            log::debug!("Ignoring blank submission");
            return;
        }

        self.dismiss_error_notification();
        self.results_scroll.reset();
        self.report_failure();
        self.mark_dirty();
    }

    /// "Clear search": empty the box and close the results card
    pub fn clear_search(&mut self, now: Instant) {
        let had_text = !self.input.query().is_empty();
        self.input.clear();

        if self.controller.dismiss(now) {
            self.dismiss_error_notification();
            self.mark_dirty();
        } else if had_text {
            self.mark_dirty();
        }
    }

    /// Apply worker responses and due timers.
    ///
    /// Marks the app dirty if anything visible changed.
    pub fn update(&mut self, now: Instant) {
        let mut changed = self.controller.poll_responses(now);
        changed |= self.controller.tick(now);
        changed |= self.notification.clear_if_expired(now);

        if changed {
            self.report_failure();
            self.mark_dirty();
        }
    }

    /// Earliest instant at which `update` has something to do
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.controller.next_deadline(),
            self.notification.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Show why the latest request failed, once per request
    fn report_failure(&mut self) {
        let request_id = self.controller.last_request_id();
        if self.reported_failure == Some(request_id) {
            return;
        }
        if let Some(error) = self.controller.last_failure() {
            let message = error.to_string();
            self.notification.show_error(&message);
            self.reported_failure = Some(request_id);
        }
    }

    fn dismiss_error_notification(&mut self) {
        if self
            .notification
            .current()
            .is_some_and(|n| n.notification_type == NotificationType::Error)
        {
            self.notification.dismiss();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
