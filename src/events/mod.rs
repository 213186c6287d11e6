//! Notification payload.
//!
//! ## Contents
//! - [`Event`] the immutable value fanned out by [`NotificationHub::notify`](crate::NotificationHub::notify)

mod event;

pub use event::Event;
