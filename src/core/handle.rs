//! # Subscription handle.
//!
//! [`SubscriptionId`] is the opaque token returned by
//! [`NotificationHub::subscribe`](crate::NotificationHub::subscribe). It identifies one
//! registration and is only meaningful to the hub that issued it.

use std::fmt;

/// Opaque handle identifying one subscription.
///
/// Handles are issued from a process-wide counter, so they are never reused and a
/// handle from one hub is unknown to every other hub. Within a hub, handle order
/// matches registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[inline]
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value (for logs/metrics).
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
