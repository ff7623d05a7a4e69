//! Rotating status messages shown while a request is outstanding

mod status_cycler;

pub use status_cycler::{StatusCycler, StatusError};
