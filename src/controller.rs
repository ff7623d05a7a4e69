//! Query-response lifecycle controller
//!
//! Sequences one query episode at a time: submission, dispatch to the answer
//! worker, status rotation while waiting, progressive reveal of the answer,
//! and the exit transition when a new query preempts the old one.
//!
//! Every request carries an id. Submitting invalidates the current id and
//! cancels its token before anything else happens, so a late completion of a
//! superseded request is recognised as stale and dropped.

mod controller_events;
mod controller_state;
mod lifecycle;
mod query;


pub use controller_state::{
    ControllerError, ControllerSettings, ControllerSnapshot, FAILURE_MESSAGE, QueryController,
};
pub use lifecycle::{AnimationPhase, ContentKind, LifecycleState};
pub use query::{Query, QueryError};
