//! # ChannelForwarder — bridge from the hub into a broadcast channel.
//!
//! [`ChannelForwarder`] is a subscriber that republishes every event into a
//! [`tokio::sync::broadcast`] channel, so async code can observe a synchronous hub.
//!
//! ## Architecture
//! ```text
//! notify(event) ──► ... ──► ChannelForwarder.receive() ──► broadcast::Sender
//!                                                              ├──► Receiver 1
//!                                                              └──► Receiver N
//! ```
//!
//! ## Rules
//! - **Non-blocking**: `receive()` never blocks; it calls `broadcast::Sender::send`.
//! - **Bounded capacity**: one ring buffer stores recent events for all receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip `n` oldest items.
//! - **No receivers**: the send fails and is reported as [`SubscriberFailure::Failed`].

use tokio::sync::broadcast;

use crate::error::SubscriberFailure;
use crate::events::Event;
use crate::subscribers::Subscribe;

/// Subscriber that forwards events into a broadcast channel.
///
/// Cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct ChannelForwarder {
    tx: broadcast::Sender<Event>,
}

impl ChannelForwarder {
    /// Creates a forwarder with the given channel capacity.
    ///
    /// The minimum capacity is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<Event>(capacity.max(1));
        Self { tx }
    }

    /// Creates a new receiver that will observe subsequently forwarded events.
    ///
    /// A receiver only gets events **sent after** it subscribes.
    pub fn receiver(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }

    /// Number of live receivers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Subscribe for ChannelForwarder {
    fn receive(&self, event: &Event) -> Result<(), SubscriberFailure> {
        self.tx
            .send(event.clone())
            .map(|_| ())
            .map_err(|_| SubscriberFailure::fail("no live receivers"))
    }

    fn name(&self) -> &str {
        "ChannelForwarder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotificationHub;

    #[test]
    fn test_forwards_to_every_receiver() {
        let fwd = ChannelForwarder::new(8);
        let mut rx1 = fwd.receiver();
        let mut rx2 = fwd.receiver();

        let hub = NotificationHub::default();
        hub.subscribe(fwd.clone());

        let report = hub.notify("v1");
        assert!(report.is_all_ok());
        assert_eq!(rx1.try_recv().unwrap().title(), "v1");
        assert_eq!(rx2.try_recv().unwrap().title(), "v1");
    }

    #[test]
    fn test_no_receivers_is_failure() {
        let fwd = ChannelForwarder::new(0);
        assert_eq!(fwd.receiver_count(), 0);

        let err = fwd.receive(&Event::new("lost")).unwrap_err();
        assert_eq!(err, SubscriberFailure::fail("no live receivers"));
    }
}
