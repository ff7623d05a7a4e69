//! tapq library - terminal query-and-answer front end
//!
//! This library exposes the core functionality of tapq for testing purposes.

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod help;
pub mod input;
pub mod notification;
pub mod results;
pub mod reveal;
pub mod scroll;
pub mod service;
pub mod status;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use controller::{LifecycleState, QueryController};
