//! Response polling and timer ticks
//!
//! Both are called from the main loop. Neither blocks: the response channel
//! is drained with `try_recv()` and timers are deadlines compared to `now`.

use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use super::controller_state::QueryController;
use super::lifecycle::{AnimationPhase, ContentKind, LifecycleState};
use crate::reveal::RevealTick;
use crate::service::{AnswerError, AnswerResponse};

impl QueryController {
    /// Drain the worker's response channel.
    ///
    /// Returns true if a current response was applied or the worker went away.
    pub fn poll_responses(&mut self, now: Instant) -> bool {
        let Some(rx) = &self.response_rx else {
            return false;
        };

        let mut responses = Vec::new();
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let mut changed = false;
        for response in responses {
            changed |= self.process_response(response, now);
        }

        if disconnected {
            log::error!("Answer worker disconnected");
            self.request_tx = None;
            self.response_rx = None;
            if self.state == LifecycleState::AwaitingResponse {
                self.fail_current(AnswerError::Disconnected, now);
            }
        }

        changed || disconnected
    }

    /// Apply one response, dropping it if its request is no longer current.
    ///
    /// Returns true if the response changed visible state.
    pub fn process_response(&mut self, response: AnswerResponse, now: Instant) -> bool {
        let request_id = response.request_id();
        let current = self.pending.as_ref().map(|p| p.request_id);

        if current != Some(request_id) || self.state != LifecycleState::AwaitingResponse {
            log::debug!(
                "Ignoring stale response from request {} (current: {:?})",
                request_id,
                current
            );
            return false;
        }

        match response {
            AnswerResponse::Answer { text, .. } => {
                log::debug!("Request {} answered ({} chars)", request_id, text.len());
                self.begin_reveal(text, ContentKind::Answer, now);
            }
            AnswerResponse::Failed { error, .. } => {
                self.fail_current(error, now);
            }
            // The controller never cancels the current request without
            // invalidating it first, so this is the worker giving up
            AnswerResponse::Cancelled { .. } => {
                self.fail_current(AnswerError::Cancelled, now);
            }
        }
        true
    }

    /// Fire every timer that is due at `now`.
    ///
    /// Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(until) = self.closing_until
            && now >= until
        {
            self.finish_closing(now);
            changed = true;
        }

        if let Some(until) = self.entering_until
            && now >= until
        {
            self.entering_until = None;
            if self.phase == AnimationPhase::Entering {
                self.phase = AnimationPhase::Steady;
                changed = true;
            }
        }

        if self.cycler.tick(now) {
            changed = true;
        }

        match self.renderer.tick(now) {
            RevealTick::Idle => {}
            RevealTick::Advanced => changed = true,
            RevealTick::Completed => {
                changed = true;
                if self.state == LifecycleState::Revealing {
                    self.finish_reveal();
                }
            }
        }

        changed
    }

    /// Earliest instant at which `tick` has something to do
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.closing_until,
            self.entering_until,
            self.cycler.next_deadline(),
            self.renderer.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}
