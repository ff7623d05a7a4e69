//! Notification module for tapq
//!
//! Transient messages drawn over the top-right corner: config warnings at
//! startup and the detail behind a failed answer.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
