//! Lifecycle states of one query episode and the legal transitions between them

/// Where the controller is in the current episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Nothing in flight; previous results (if any) stay on screen
    #[default]
    Idle,
    /// A query was accepted and is about to be dispatched
    Submitting,
    /// Request in flight, status messages rotating
    AwaitingResponse,
    /// Answer (or the failure message) being revealed
    Revealing,
    /// Exit transition of the current results card
    Closing,
}

impl LifecycleState {
    /// Whether `self -> next` is an edge of the episode state machine.
    ///
    /// Preemption always leaves through `Closing`, and `Closing` is the only
    /// way back to `Submitting` once a results card exists, so no state is
    /// revisited out of order within an episode.
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;

        matches!(
            (self, next),
            (Idle, Submitting)
                | (Idle, Closing)
                | (Submitting, AwaitingResponse)
                | (AwaitingResponse, Revealing)
                | (AwaitingResponse, Closing)
                | (Revealing, Idle)
                | (Revealing, Closing)
                | (Closing, Submitting)
                | (Closing, Idle)
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Submitting => "submitting",
            LifecycleState::AwaitingResponse => "awaiting response",
            LifecycleState::Revealing => "revealing",
            LifecycleState::Closing => "closing",
        }
    }
}

/// Enter/exit animation of the results card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    Entering,
    #[default]
    Steady,
    Exiting,
}

/// What the revealed text represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    #[default]
    Answer,
    /// The fixed failure message standing in for a failed request
    Failure,
}
