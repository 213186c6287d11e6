//! # NotificationHub - ordered, failure-isolated fan-out.
//!
//! The hub owns an ordered registry `SubscriptionId -> subscriber` and delivers each
//! event to every registered subscriber, one at a time, on the caller's thread.
//!
//! ## Architecture
//! ```text
//! subscribe(s) ──► lock ─► insert(next handle, s) ─► unlock ──► SubscriptionId
//! unsubscribe(id) ─► lock ─► remove(id) ─► unlock ──► Ok | UnknownSubscriber
//!
//! notify(event)
//!     ├─► lock ─► copy ordered snapshot ─► unlock
//!     └─► for (id, s) in snapshot:
//!           ├─► still registered? (skip_removed) ── no ──► skip
//!           ├─► catch_unwind(s.receive(&event))
//!           │      ├─ Ok(())   ──► Delivery { outcome: Ok }
//!           │      ├─ Err(e)   ──► Delivery { outcome: Err(e) }
//!           │      └─ panic    ──► Delivery { outcome: Err(Panicked) }
//!           └─► continue
//! ```
//!
//! ## Rules
//! - Delivery order equals registration order.
//! - Subscribers added during a dispatch are not part of it.
//! - The lock is never held while a subscriber runs; subscribers may call back into the hub.
//! - One failing or panicking subscriber never stops delivery to the others.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a subscriber uses `Arc<Mutex<T>>` and panics while holding the lock.

use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use parking_lot::Mutex;

use crate::core::{Delivery, HubConfig, NotifyReport, SubscriptionId};
use crate::error::{HubError, SubscriberFailure};
use crate::events::Event;
use crate::subscribers::{Subscribe, SubscriberFn, SubscriberRef};

/// Process-wide handle counter, so handles from different hubs never collide.
static SUBSCRIPTION_SEQ: AtomicU64 = AtomicU64::new(1);

/// Registered subscriber plus its name captured at registration.
#[derive(Clone)]
struct Entry {
    name: Arc<str>,
    subscriber: SubscriberRef,
}

/// State guarded by the hub lock.
struct Registry {
    entries: BTreeMap<SubscriptionId, Entry>,
}

impl Registry {
    fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

/// In-process publisher for one named event source.
///
/// Share between threads with `Arc<NotificationHub>`; every operation takes `&self`.
///
/// # Example
/// ```rust
/// use notifyhub::NotificationHub;
///
/// let hub = NotificationHub::named("go-channel");
/// let alice = hub.subscribe_fn("alice", |ev| {
///     println!("alice received notification for new video: {}", ev.title());
///     Ok(())
/// });
///
/// let report = hub.notify("New Go Tutorial");
/// assert_eq!(report.ids(), vec![alice]);
/// assert!(report.is_all_ok());
///
/// hub.unsubscribe(alice).unwrap();
/// assert!(hub.notify("Another one").is_empty());
/// ```
pub struct NotificationHub {
    cfg: HubConfig,
    registry: Mutex<Registry>,
}

impl NotificationHub {
    /// Creates an empty hub.
    pub fn new(cfg: HubConfig) -> Self {
        Self {
            cfg,
            registry: Mutex::new(Registry::new()),
        }
    }

    /// Creates an empty hub with default settings and the given name.
    pub fn named(name: impl Into<std::borrow::Cow<'static, str>>) -> Self {
        Self::new(HubConfig::named(name))
    }

    /// Name of the event source this hub publishes for.
    pub fn name(&self) -> &str {
        &self.cfg.name
    }

    /// Configuration the hub was built with.
    pub fn config(&self) -> &HubConfig {
        &self.cfg
    }

    /// Registers a subscriber and returns its handle.
    ///
    /// Never fails. The same subscriber value may be registered several times;
    /// each registration gets its own handle.
    pub fn subscribe<S: Subscribe>(&self, subscriber: S) -> SubscriptionId {
        self.subscribe_arc(Arc::new(subscriber))
    }

    /// Registers an already shared subscriber.
    pub fn subscribe_arc(&self, subscriber: SubscriberRef) -> SubscriptionId {
        let name: Arc<str> = Arc::from(subscriber.name());
        let entry = Entry {
            name: Arc::clone(&name),
            subscriber,
        };

        let id = {
            let mut reg = self.registry.lock();
            // Drawn under the lock so handle order within a hub is insertion order.
            let raw = SUBSCRIPTION_SEQ.fetch_add(1, AtomicOrdering::Relaxed);
            let id = SubscriptionId::from_raw(raw);
            let prev = reg.entries.insert(id, entry);
            debug_assert!(prev.is_none(), "subscription handle {id} issued twice");
            id
        };

        tracing::debug!(hub = %self.cfg.name, %id, subscriber = %name, "subscription created");
        id
    }

    /// Registers a closure as a named subscriber.
    ///
    /// Shorthand for `subscribe(SubscriberFn::new(name, f))`.
    pub fn subscribe_fn<F>(
        &self,
        name: impl Into<std::borrow::Cow<'static, str>>,
        f: F,
    ) -> SubscriptionId
    where
        F: Fn(&Event) -> Result<(), SubscriberFailure> + Send + Sync + 'static,
    {
        self.subscribe(SubscriberFn::new(name, f))
    }

    /// Removes the subscription identified by `id`.
    ///
    /// # Errors
    /// [`HubError::UnknownSubscriber`] if `id` was never issued by this hub or was
    /// already removed. The hub state is left untouched in that case.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<(), HubError> {
        let removed = self.registry.lock().entries.remove(&id);

        match removed {
            Some(entry) => {
                tracing::debug!(
                    hub = %self.cfg.name,
                    %id,
                    subscriber = %entry.name,
                    "subscription removed"
                );
                Ok(())
            }
            None => {
                tracing::debug!(hub = %self.cfg.name, %id, "unsubscribe of unknown handle");
                Err(HubError::UnknownSubscriber { id })
            }
        }
    }

    /// Delivers `event` to every subscriber registered at call entry, in registration order.
    ///
    /// Runs synchronously on the calling thread and always runs to completion.
    /// Failures (returned errors and panics) are captured per subscriber in the
    /// returned [`NotifyReport`]; they never abort the dispatch.
    pub fn notify(&self, event: impl Into<Event>) -> NotifyReport {
        let event = event.into();

        let snapshot: Vec<(SubscriptionId, Entry)> = {
            let reg = self.registry.lock();
            reg.entries
                .iter()
                .map(|(id, entry)| (*id, entry.clone()))
                .collect()
        };

        tracing::trace!(
            hub = %self.cfg.name,
            seq = event.seq,
            subscribers = snapshot.len(),
            "dispatching event"
        );

        let mut report = NotifyReport::with_capacity(snapshot.len());
        for (id, entry) in snapshot {
            if self.cfg.skip_removed && !self.contains(id) {
                continue;
            }

            let call = AssertUnwindSafe(|| entry.subscriber.receive(&event));
            let outcome = match panic::catch_unwind(call) {
                Ok(res) => res,
                Err(payload) => Err(SubscriberFailure::from_panic(&*payload)),
            };

            if let Err(err) = &outcome {
                if self.cfg.log_failures {
                    tracing::warn!(
                        hub = %self.cfg.name,
                        %id,
                        subscriber = %entry.name,
                        seq = event.seq,
                        label = err.as_label(),
                        "subscriber failed: {}",
                        err.as_message()
                    );
                }
            }

            report.push(Delivery {
                id,
                name: entry.name,
                outcome,
            });
        }
        report
    }

    /// Returns `true` if `id` is currently registered.
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.registry.lock().entries.contains_key(&id)
    }

    /// Number of registered subscribers.
    pub fn len(&self) -> usize {
        self.registry.lock().entries.len()
    }

    /// Returns `true` if no subscriber is registered.
    pub fn is_empty(&self) -> bool {
        self.registry.lock().entries.is_empty()
    }

    /// Registered subscriptions in delivery order, as `(handle, name)` pairs.
    pub fn subscribers(&self) -> Vec<(SubscriptionId, Arc<str>)> {
        let reg = self.registry.lock();
        reg.entries
            .iter()
            .map(|(id, entry)| (*id, Arc::clone(&entry.name)))
            .collect()
    }

    /// Removes every subscription; all outstanding handles become unknown.
    ///
    /// Returns how many subscriptions were removed.
    pub fn clear(&self) -> usize {
        let drained = std::mem::take(&mut self.registry.lock().entries);
        let n = drained.len();
        // Subscribers are dropped here, outside the lock.
        drop(drained);

        tracing::debug!(hub = %self.cfg.name, removed = n, "all subscriptions removed");
        n
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new(HubConfig::default())
    }
}

impl fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHub")
            .field("name", &self.cfg.name)
            .field("subscribers", &self.len())
            .finish()
    }
}
