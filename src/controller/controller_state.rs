//! Controller state and the operations that drive transitions

use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::lifecycle::{AnimationPhase, ContentKind, LifecycleState};
use super::query::{Query, QueryError};
use crate::config::Config;
use crate::reveal::{ProgressiveRenderer, RevealError, RevealSettings};
use crate::service::{AnswerError, AnswerRequest, AnswerResponse};
use crate::status::{StatusCycler, StatusError};

/// Revealed in place of an answer when the request fails
pub const FAILURE_MESSAGE: &str = "No response available. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Reveal(#[from] RevealError),
}

/// Timing and content inputs of the controller
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub status_messages: Vec<String>,
    pub status_interval: Duration,
    pub reveal: RevealSettings,
    /// Length of the results card exit transition
    pub closing: Duration,
    /// Length of the results card enter transition
    pub entering: Duration,
}

impl ControllerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            status_messages: config.status.messages.clone(),
            status_interval: config.status.interval(),
            reveal: config.reveal.settings(),
            closing: Duration::from_millis(config.transition.closing_ms),
            entering: Duration::from_millis(config.transition.entering_ms),
        }
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// The one request whose response may still change the screen
#[derive(Debug)]
pub(super) struct PendingRequest {
    pub(super) request_id: u64,
    pub(super) cancel_token: CancellationToken,
}

/// Read-only view handed to the presentation layer each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSnapshot<'a> {
    pub state: LifecycleState,
    pub phase: AnimationPhase,
    pub query: Option<&'a str>,
    pub status_message: Option<&'a str>,
    pub revealed: &'a str,
    pub revealing: bool,
    pub content_kind: ContentKind,
}

pub struct QueryController {
    pub(super) state: LifecycleState,
    pub(super) phase: AnimationPhase,
    /// End of the Entering phase
    pub(super) entering_until: Option<Instant>,
    /// End of the Closing state
    pub(super) closing_until: Option<Instant>,
    /// Query waiting for the exit transition to finish
    pub(super) queued: Option<Query>,
    /// Query whose results card is on screen
    pub(super) current_query: Option<Query>,
    pub(super) content_kind: ContentKind,
    pub(super) last_failure: Option<AnswerError>,
    pub(super) request_id: u64,
    pub(super) pending: Option<PendingRequest>,
    pub(super) request_tx: Option<Sender<AnswerRequest>>,
    pub(super) response_rx: Option<Receiver<AnswerResponse>>,
    pub(super) cycler: StatusCycler,
    pub(super) renderer: ProgressiveRenderer,
    pub(super) settings: ControllerSettings,
    #[cfg(test)]
    pub(crate) transitions: Vec<(LifecycleState, LifecycleState)>,
}

impl QueryController {
    /// Create an idle controller.
    ///
    /// Fails fast on settings the timers could not run with.
    pub fn new(settings: ControllerSettings) -> Result<Self, ControllerError> {
        settings.reveal.validate()?;
        let cycler = StatusCycler::new(settings.status_messages.clone(), settings.status_interval)?;

        Ok(Self {
            state: LifecycleState::Idle,
            phase: AnimationPhase::Steady,
            entering_until: None,
            closing_until: None,
            queued: None,
            current_query: None,
            content_kind: ContentKind::Answer,
            last_failure: None,
            request_id: 0,
            pending: None,
            request_tx: None,
            response_rx: None,
            cycler,
            renderer: ProgressiveRenderer::new(),
            settings,
            #[cfg(test)]
            transitions: Vec::new(),
        })
    }

    /// Connect the channels of the answer worker
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AnswerRequest>,
        response_rx: Receiver<AnswerResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    /// Submit a new query, preempting whatever episode is running.
    ///
    /// Blank input is rejected without touching any state.
    pub fn submit(&mut self, raw: &str, now: Instant) -> Result<(), QueryError> {
        let query = Query::parse(raw)?;
        log::debug!("Submit {:?} while {}", query.text(), self.state.label());

        self.invalidate_pending();
        self.stop_timers();

        if self.state == LifecycleState::Closing {
            // Exit transition already running; the newest query wins
            self.queued = Some(query);
        } else if self.has_results_surface() {
            self.queued = Some(query);
            self.begin_closing(now);
        } else {
            self.transition(LifecycleState::Submitting);
            self.dispatch(query, now);
        }
        Ok(())
    }

    /// Clear the results card ("clear search").
    ///
    /// Returns false if there was nothing to clear.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if self.state == LifecycleState::Closing {
            let had_queued = self.queued.take().is_some();
            return had_queued;
        }
        if !self.has_results_surface() {
            return false;
        }

        self.invalidate_pending();
        self.stop_timers();
        self.queued = None;
        self.begin_closing(now);
        true
    }

    pub fn current_state(&self) -> LifecycleState {
        self.state
    }

    pub fn current_status_message(&self) -> Option<&str> {
        self.cycler.current_message()
    }

    pub fn current_revealed_content(&self) -> &str {
        self.renderer.revealed_text()
    }

    pub fn animation_phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn content_kind(&self) -> ContentKind {
        self.content_kind
    }

    pub fn current_query(&self) -> Option<&str> {
        self.current_query.as_ref().map(Query::text)
    }

    pub fn last_failure(&self) -> Option<&AnswerError> {
        self.last_failure.as_ref()
    }

    pub fn is_reveal_in_progress(&self) -> bool {
        self.renderer.is_revealing()
    }

    /// Id of the request whose response is still wanted
    pub fn pending_request_id(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.request_id)
    }

    /// Id of the most recently dispatched request, 0 before the first
    pub fn last_request_id(&self) -> u64 {
        self.request_id
    }

    /// Number of running recurring timers (status + reveal)
    pub fn active_timer_count(&self) -> usize {
        usize::from(self.cycler.is_running()) + usize::from(self.renderer.is_revealing())
    }

    /// Whether a results card (loading, revealing or finished) is on screen
    pub fn has_results_surface(&self) -> bool {
        match self.state {
            LifecycleState::AwaitingResponse
            | LifecycleState::Revealing
            | LifecycleState::Closing => true,
            LifecycleState::Idle => self.current_query.is_some(),
            LifecycleState::Submitting => false,
        }
    }

    pub fn snapshot(&self) -> ControllerSnapshot<'_> {
        ControllerSnapshot {
            state: self.state,
            phase: self.phase,
            query: self.current_query(),
            status_message: self.current_status_message(),
            revealed: self.current_revealed_content(),
            revealing: self.is_reveal_in_progress(),
            content_kind: self.content_kind,
        }
    }

    pub(super) fn transition(&mut self, next: LifecycleState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal lifecycle transition {:?} -> {:?}",
            self.state,
            next
        );
        log::debug!("Lifecycle {:?} -> {:?}", self.state, next);

        #[cfg(test)]
        self.transitions.push((self.state, next));

        self.state = next;
    }

    /// Forget the current request and cancel its token.
    ///
    /// After this any response carrying the old id is stale.
    pub(super) fn invalidate_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!("Invalidating request {}", pending.request_id);
            pending.cancel_token.cancel();
        }
    }

    pub(super) fn stop_timers(&mut self) {
        self.cycler.stop();
        self.renderer.stop();
    }

    pub(super) fn begin_closing(&mut self, now: Instant) {
        self.transition(LifecycleState::Closing);
        self.phase = AnimationPhase::Exiting;
        self.entering_until = None;

        if self.settings.closing.is_zero() {
            self.finish_closing(now);
        } else {
            self.closing_until = Some(now + self.settings.closing);
        }
    }

    pub(super) fn finish_closing(&mut self, now: Instant) {
        self.closing_until = None;
        self.phase = AnimationPhase::Steady;

        match self.queued.take() {
            Some(query) => {
                self.transition(LifecycleState::Submitting);
                self.dispatch(query, now);
            }
            None => {
                self.transition(LifecycleState::Idle);
                self.current_query = None;
                self.content_kind = ContentKind::Answer;
                self.renderer.clear();
            }
        }
    }

    /// Issue the request for `query` (Submitting -> AwaitingResponse).
    pub(super) fn dispatch(&mut self, query: Query, now: Instant) {
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        let cancel_token = CancellationToken::new();

        self.renderer.clear();
        self.content_kind = ContentKind::Answer;
        self.last_failure = None;
        self.current_query = Some(query.clone());

        self.transition(LifecycleState::AwaitingResponse);
        self.cycler.start(now);
        if self.settings.entering.is_zero() {
            self.phase = AnimationPhase::Steady;
        } else {
            self.phase = AnimationPhase::Entering;
            self.entering_until = Some(now + self.settings.entering);
        }

        self.pending = Some(PendingRequest {
            request_id,
            cancel_token: cancel_token.clone(),
        });

        let sent = match &self.request_tx {
            Some(tx) => tx
                .send(AnswerRequest::Query {
                    query: query.text().to_string(),
                    request_id,
                    cancel_token,
                })
                .is_ok(),
            None => false,
        };

        if sent {
            log::debug!("Dispatched request {} for {:?}", request_id, query.text());
        } else {
            self.request_tx = None;
            self.fail_current(AnswerError::Disconnected, now);
        }
    }

    /// Swap the pending request for the failure message reveal.
    pub(super) fn fail_current(&mut self, error: AnswerError, now: Instant) {
        log::debug!("Request failed: {}", error);
        self.last_failure = Some(error);
        self.begin_reveal(FAILURE_MESSAGE.to_string(), ContentKind::Failure, now);
    }

    /// AwaitingResponse -> Revealing with `text`.
    pub(super) fn begin_reveal(&mut self, text: String, kind: ContentKind, now: Instant) {
        self.pending = None;
        self.cycler.stop();
        self.content_kind = kind;
        self.transition(LifecycleState::Revealing);

        if let Err(e) = self.settings.reveal.validate() {
            log::error!("Reveal settings rejected, showing content in full: {}", e);
            self.renderer.reveal_all(text);
        } else if let Err(e) = self.renderer.start(text, self.settings.reveal, now) {
            log::error!("Reveal failed to start: {}", e);
        }
        if !self.renderer.is_revealing() {
            self.finish_reveal();
        }
    }

    pub(super) fn finish_reveal(&mut self) {
        self.transition(LifecycleState::Idle);
    }
}
