use std::time::{Duration, Instant};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("status cycler needs at least one message")]
    NoMessages,

    #[error("status interval must be greater than zero")]
    ZeroInterval,
}

/// Cycles through a fixed, non-empty list of messages.
///
/// The message set is validated once at construction so a tick can never
/// find it empty. The cursor is reset by every `start`.
#[derive(Debug)]
pub struct StatusCycler {
    messages: Vec<String>,
    interval: Duration,
    cursor: usize,
    /// Deadline of the next rotation; `Some` exactly while running
    next_tick: Option<Instant>,
}

impl StatusCycler {
    pub fn new(messages: Vec<String>, interval: Duration) -> Result<Self, StatusError> {
        if messages.is_empty() {
            return Err(StatusError::NoMessages);
        }
        if interval.is_zero() {
            return Err(StatusError::ZeroInterval);
        }
        Ok(Self {
            messages,
            interval,
            cursor: 0,
            next_tick: None,
        })
    }

    /// Start emitting from the first message. Restarts if already running.
    pub fn start(&mut self, now: Instant) {
        self.cursor = 0;
        self.next_tick = Some(now + self.interval);
    }

    /// Rotate once per elapsed interval, wrapping after the last message.
    ///
    /// Returns true if the visible message changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(mut deadline) = self.next_tick else {
            return false;
        };

        let mut rotated = false;
        while now >= deadline {
            self.cursor = (self.cursor + 1) % self.messages.len();
            deadline += self.interval;
            rotated = true;
        }
        self.next_tick = Some(deadline);

        rotated && self.messages.len() > 1
    }

    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Message to display, `None` while stopped
    pub fn current_message(&self) -> Option<&str> {
        self.next_tick?;
        self.messages.get(self.cursor).map(String::as_str)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

#[cfg(test)]
#[path = "status_cycler_tests.rs"]
mod status_cycler_tests;
