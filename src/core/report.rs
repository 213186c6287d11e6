//! # Dispatch outcome list.
//!
//! [`NotifyReport`] is what [`NotificationHub::notify`](crate::NotificationHub::notify)
//! returns: one [`Delivery`] per visited subscriber, in delivery order.
//!
//! ## Example
//! ```rust
//! use notifyhub::{NotificationHub, SubscriberFailure};
//!
//! let hub = NotificationHub::default();
//! let ok = hub.subscribe_fn("ok", |_| Ok(()));
//! let bad = hub.subscribe_fn("bad", |_| Err(SubscriberFailure::fail("offline")));
//!
//! let report = hub.notify("ping");
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.delivered(), 1);
//! assert!(report.outcome(ok).unwrap().is_ok());
//! assert!(report.outcome(bad).unwrap().is_err());
//! ```

use std::slice;
use std::sync::Arc;
use std::vec;

use crate::core::SubscriptionId;
use crate::error::SubscriberFailure;

/// Outcome of delivering one event to one subscriber.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    /// Handle of the subscription that was visited.
    pub id: SubscriptionId,
    /// Subscriber name captured at registration.
    pub name: Arc<str>,
    /// `Ok(())` or the captured failure.
    pub outcome: Result<(), SubscriberFailure>,
}

impl Delivery {
    /// Returns `true` if the subscriber accepted the event.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Ordered per-subscriber outcome list of one dispatch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyReport {
    deliveries: Vec<Delivery>,
}

impl NotifyReport {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            deliveries: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, delivery: Delivery) {
        self.deliveries.push(delivery);
    }

    /// Number of subscribers visited.
    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    /// Returns `true` if no subscriber was visited.
    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Iterates deliveries in delivery order.
    pub fn iter(&self) -> slice::Iter<'_, Delivery> {
        self.deliveries.iter()
    }

    /// Number of successful deliveries.
    pub fn delivered(&self) -> usize {
        self.deliveries.iter().filter(|d| d.is_ok()).count()
    }

    /// Iterates failed deliveries as `(id, failure)` pairs.
    pub fn failures(&self) -> impl Iterator<Item = (SubscriptionId, &SubscriberFailure)> {
        self.deliveries
            .iter()
            .filter_map(|d| d.outcome.as_ref().err().map(|e| (d.id, e)))
    }

    /// Returns `true` if every visited subscriber succeeded (vacuously true when empty).
    pub fn is_all_ok(&self) -> bool {
        self.deliveries.iter().all(Delivery::is_ok)
    }

    /// Returns the outcome recorded for `id`, if it was visited.
    pub fn outcome(&self, id: SubscriptionId) -> Option<&Result<(), SubscriberFailure>> {
        self.deliveries
            .iter()
            .find(|d| d.id == id)
            .map(|d| &d.outcome)
    }

    /// Visited handles in delivery order.
    pub fn ids(&self) -> Vec<SubscriptionId> {
        self.deliveries.iter().map(|d| d.id).collect()
    }

    /// Consumes the report, returning the underlying list.
    pub fn into_vec(self) -> Vec<Delivery> {
        self.deliveries
    }
}

impl IntoIterator for NotifyReport {
    type Item = Delivery;
    type IntoIter = vec::IntoIter<Delivery>;

    fn into_iter(self) -> Self::IntoIter {
        self.deliveries.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotifyReport {
    type Item = &'a Delivery;
    type IntoIter = slice::Iter<'a, Delivery>;

    fn into_iter(self) -> Self::IntoIter {
        self.deliveries.iter()
    }
}
