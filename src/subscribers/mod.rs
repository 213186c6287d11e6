//! # Subscribers for the notification hub.
//!
//! This module provides the [`Subscribe`] trait and the implementations that ship
//! with the crate.
//!
//! ## Architecture
//! ```text
//! caller ── notify(Event) ──► NotificationHub ──► snapshot (registration order)
//!                                                    │
//!                                                    ├──► s1.receive(&Event) ─► Ok
//!                                                    ├──► s2.receive(&Event) ─► Err / panic (captured)
//!                                                    └──► sN.receive(&Event) ─► Ok
//! ```
//!
//! ## Subscriber types
//! - **Custom** - any type implementing [`Subscribe`]
//! - **Closures** - [`SubscriberFn`] pairs a name with `Fn(&Event)`
//! - **Built-in** - [`LogWriter`] (feature `logging`), [`ChannelForwarder`] (feature `broadcast`)

mod embedded;
mod subscribe;
mod subscriber_fn;

#[cfg(feature = "broadcast")]
pub use embedded::ChannelForwarder;
#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub use subscribe::Subscribe;
pub use subscriber_fn::{SubscriberFn, SubscriberRef};
