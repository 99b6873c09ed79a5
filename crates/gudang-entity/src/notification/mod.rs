//! Notification domain entities.

pub mod event;
pub mod model;

pub use event::NotificationEvent;
pub use model::Notification;
