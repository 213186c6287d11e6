//! # Function-backed subscriber (`SubscriberFn`)
//!
//! [`SubscriberFn`] wraps a closure `F: Fn(&Event) -> Result<(), SubscriberFailure>`
//! together with a name. Shared state, if any, is captured explicitly (`Arc<...>`).
//!
//! ## Example
//! ```rust
//! use notifyhub::{Event, Subscribe, SubscriberFn, SubscriberRef};
//!
//! let s: SubscriberRef = SubscriberFn::arc("printer", |ev: &Event| {
//!     println!("got {}", ev.title());
//!     Ok(())
//! });
//!
//! assert_eq!(s.name(), "printer");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::SubscriberFailure;
use crate::events::Event;
use crate::subscribers::Subscribe;

/// Shared handle to a subscriber as stored by the hub.
pub type SubscriberRef = Arc<dyn Subscribe>;

/// Function-backed subscriber implementation.
pub struct SubscriberFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscriberFn<F>
where
    F: Fn(&Event) -> Result<(), SubscriberFailure> + Send + Sync + 'static,
{
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscriberFn::arc`] when you immediately need a [`SubscriberRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for SubscriberFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> Subscribe for SubscriberFn<F>
where
    F: Fn(&Event) -> Result<(), SubscriberFailure> + Send + Sync + 'static, // Fn, not FnMut
{
    fn receive(&self, event: &Event) -> Result<(), SubscriberFailure> {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_closure_is_invoked() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let s = SubscriberFn::new("counter", move |_: &Event| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        s.receive(&Event::new("a")).unwrap();
        s.receive(&Event::new("b")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(s.name(), "counter");
    }

    #[test]
    fn test_closure_error_is_returned() {
        let s = SubscriberFn::new("broken", |_: &Event| Err(SubscriberFailure::fail("nope")));
        assert_eq!(
            s.receive(&Event::new("x")),
            Err(SubscriberFailure::fail("nope"))
        );
    }
}
