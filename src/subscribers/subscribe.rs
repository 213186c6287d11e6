//! # Subscriber capability.
//!
//! Provides [`Subscribe`], the extension point for plugging event handlers into a
//! [`NotificationHub`](crate::NotificationHub).
//!
//! ## Rules
//! - `receive` runs synchronously on the thread that called `notify`.
//! - Subscribers are visited one at a time, in registration order.
//! - An `Err` or a panic is captured by the hub and recorded for this subscriber only;
//!   the remaining subscribers still receive the event.
//! - The hub lock is not held during `receive`, so a subscriber may call back into
//!   the same hub.
//!
//! ## Example
//! ```rust
//! use notifyhub::{Event, NotificationHub, Subscribe, SubscriberFailure};
//!
//! struct Audit;
//!
//! impl Subscribe for Audit {
//!     fn receive(&self, ev: &Event) -> Result<(), SubscriberFailure> {
//!         if ev.title().is_empty() {
//!             return Err(SubscriberFailure::fail("empty title"));
//!         }
//!         // write audit record...
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "audit" }
//! }
//!
//! let hub = NotificationHub::default();
//! hub.subscribe(Audit);
//! assert!(hub.notify("deploy finished").is_all_ok());
//! ```

use std::sync::Arc;

use crate::error::SubscriberFailure;
use crate::events::Event;

/// Capability of receiving notifications from a hub.
///
/// ### Implementation requirements
/// - Return quickly: a slow subscriber delays the subscribers after it.
/// - Report errors through the return value; panics are caught but should be avoided.
pub trait Subscribe: Send + Sync + 'static {
    /// Handles a single event.
    ///
    /// Returning `Err` records the failure against this subscriber in the
    /// [`NotifyReport`](crate::NotifyReport); delivery continues with the next one.
    fn receive(&self, event: &Event) -> Result<(), SubscriberFailure>;

    /// Returns the subscriber name used in logs and reports.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<S: Subscribe + ?Sized> Subscribe for Arc<S> {
    fn receive(&self, event: &Event) -> Result<(), SubscriberFailure> {
        (**self).receive(event)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: Subscribe + ?Sized> Subscribe for Box<S> {
    fn receive(&self, event: &Event) -> Result<(), SubscriberFailure> {
        (**self).receive(event)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
