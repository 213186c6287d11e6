//! # notifyhub
//!
//! **notifyhub** is a small in-process publish/subscribe core for Rust.
//!
//! A [`NotificationHub`] keeps the ordered set of subscribers of one named event
//! source and delivers each [`Event`] to all of them, synchronously and in
//! registration order. Every registration returns an opaque [`SubscriptionId`] used
//! to unsubscribe later. A failing or panicking subscriber is isolated: its failure is
//! recorded in the returned [`NotifyReport`] and delivery continues with the others.
//!
//! ## Architecture
//! ```text
//!    caller threads
//!   ┌──────────────┐  subscribe / unsubscribe   ┌──────────────────────────────┐
//!   │  any thread  │ ─────────────────────────► │ NotificationHub              │
//!   └──────────────┘                            │  Mutex<BTreeMap<id, sub>>    │
//!   ┌──────────────┐        notify(event)       │  (held only to copy/modify)  │
//!   │  any thread  │ ─────────────────────────► └──────────────┬───────────────┘
//!   └──────────────┘                                           │ ordered snapshot
//!                                                              ▼
//!                               s1.receive(&ev) ─► s2.receive(&ev) ─► ... sN.receive(&ev)
//!                                     │                  │                    │
//!                                     ▼                  ▼                    ▼
//!                                 Delivery(ok)   Delivery(err/panic)     Delivery(ok)
//!                                     └──────────────────┴────────────────────┘
//!                                                  NotifyReport
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                      |
//! |-------------------|--------------------------------------------------------------|-----------------------------------------|
//! | **Hub**           | Registration, unsubscription, ordered fan-out.               | [`NotificationHub`], [`SubscriptionId`] |
//! | **Subscriber API**| Plug in handlers as types or closures.                       | [`Subscribe`], [`SubscriberFn`]         |
//! | **Reports**       | Per-subscriber outcome of each dispatch.                     | [`NotifyReport`], [`Delivery`]          |
//! | **Errors**        | Typed errors for hub operations and subscriber failures.     | [`HubError`], [`SubscriberFailure`]     |
//! | **Configuration** | Hub name, failure logging, mid-dispatch removal handling.    | [`HubConfig`]                           |
//!
//! ## Optional features
//! - `logging` _(default)_: exports the built-in `LogWriter` subscriber.
//! - `broadcast`: exports `ChannelForwarder`, bridging a hub into a tokio broadcast channel.
//!
//! ## Example
//! ```rust
//! use notifyhub::{HubConfig, NotificationHub, SubscriberFailure};
//!
//! let hub = NotificationHub::new(HubConfig::named("releases"));
//!
//! let a = hub.subscribe_fn("mailer", |ev| {
//!     println!("mail: {}", ev.title());
//!     Ok(())
//! });
//! let b = hub.subscribe_fn("pager", |_| Err(SubscriberFailure::fail("pager offline")));
//!
//! let report = hub.notify("v1.2.0 released");
//! assert_eq!(report.ids(), vec![a, b]);
//! assert_eq!(report.delivered(), 1);
//!
//! hub.unsubscribe(b).unwrap();
//! assert!(hub.notify("v1.2.1 released").is_all_ok());
//! ```
mod core;
mod error;
mod events;
mod subscribers;

// ---- Public re-exports ----

pub use crate::core::{Delivery, HubConfig, NotificationHub, NotifyReport, SubscriptionId};
pub use error::{HubError, SubscriberFailure};
pub use events::Event;
pub use subscribers::{Subscribe, SubscriberFn, SubscriberRef};

// Optional: bridge into a tokio broadcast channel.
// Enable with: `--features broadcast`
#[cfg(feature = "broadcast")]
pub use subscribers::ChannelForwarder;

// Optional: built-in subscriber writing events through `tracing` (on by default).
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
