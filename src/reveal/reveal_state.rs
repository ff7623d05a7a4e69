//! Progressive renderer state
//!
//! Owns the content of one reveal episode and a cursor counting revealed
//! characters. The cursor only moves forward and stops at the content length.
//! The "timer" is a deadline polled by the event loop, so stopping it is just
//! clearing the deadline.

use std::time::{Duration, Instant};

use thiserror::Error;

use super::chunking::{RevealUnit, char_prefix};

/// Chunk granularity and cadence for one reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSettings {
    pub unit: RevealUnit,
    pub chunk_size: usize,
    pub interval: Duration,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            unit: RevealUnit::Chars,
            chunk_size: 10,
            interval: Duration::from_millis(30),
        }
    }
}

impl RevealSettings {
    pub fn validate(&self) -> Result<(), RevealError> {
        if self.chunk_size == 0 {
            return Err(RevealError::ZeroChunk);
        }
        if self.interval.is_zero() {
            return Err(RevealError::ZeroInterval);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("reveal chunk size must be at least 1")]
    ZeroChunk,

    #[error("reveal interval must be greater than zero")]
    ZeroInterval,
}

/// Outcome of polling the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTick {
    /// Nothing due (or no reveal running)
    Idle,
    /// Cursor moved, more content remains
    Advanced,
    /// Cursor reached the end; reported once per episode
    Completed,
}

#[derive(Debug, Default)]
pub struct ProgressiveRenderer {
    content: String,
    total: usize,
    revealed: usize,
    settings: RevealSettings,
    /// Deadline of the next chunk; `Some` exactly while a reveal is running
    next_tick: Option<Instant>,
}

impl ProgressiveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin revealing `content` from the start.
    ///
    /// Any reveal already running is replaced. Empty content completes
    /// immediately and never schedules a tick.
    pub fn start(
        &mut self,
        content: String,
        settings: RevealSettings,
        now: Instant,
    ) -> Result<(), RevealError> {
        settings.validate()?;

        self.stop();
        self.total = content.chars().count();
        self.content = content;
        self.revealed = 0;
        self.settings = settings;

        if self.total == 0 {
            log::debug!("Reveal of empty content completed immediately");
            return Ok(());
        }

        self.next_tick = Some(now + settings.interval);
        Ok(())
    }

    /// Advance the cursor for every interval elapsed up to `now`.
    pub fn tick(&mut self, now: Instant) -> RevealTick {
        let Some(mut deadline) = self.next_tick else {
            return RevealTick::Idle;
        };
        if now < deadline {
            return RevealTick::Idle;
        }

        while now >= deadline && self.revealed < self.total {
            self.revealed =
                self.settings
                    .unit
                    .advance(&self.content, self.revealed, self.settings.chunk_size);
            deadline += self.settings.interval;
        }

        if self.revealed >= self.total {
            self.next_tick = None;
            RevealTick::Completed
        } else {
            self.next_tick = Some(deadline);
            RevealTick::Advanced
        }
    }

    /// Cancel a running reveal, keeping whatever is already revealed.
    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    /// Show `content` in full without animating.
    pub fn reveal_all(&mut self, content: String) {
        self.stop();
        self.total = content.chars().count();
        self.revealed = self.total;
        self.content = content;
    }

    /// Drop all content and stop.
    pub fn clear(&mut self) {
        self.stop();
        self.content.clear();
        self.total = 0;
        self.revealed = 0;
    }

    pub fn is_revealing(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn revealed_text(&self) -> &str {
        char_prefix(&self.content, self.revealed)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn total_len(&self) -> usize {
        self.total
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }
}

#[cfg(test)]
#[path = "reveal_state_tests.rs"]
mod reveal_state_tests;
