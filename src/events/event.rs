//! # Notification payload delivered by the hub.
//!
//! An [`Event`] carries a title plus metadata such as a timestamp, an optional
//! source name and a sequence number.
//!
//! ## Ordering guarantees
//! Each event has a process-wide unique sequence number (`seq`) that increases
//! monotonically with construction order. Use `seq` to correlate deliveries of the
//! same event across subscribers.
//!
//! ## Example
//! ```rust
//! use notifyhub::Event;
//!
//! let ev = Event::new("New Rust Tutorial").with_source("rust-channel");
//!
//! assert_eq!(ev.title(), "New Rust Tutorial");
//! assert_eq!(ev.source.as_deref(), Some("rust-channel"));
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Immutable notification payload.
///
/// - `seq`: monotonic global sequence
/// - `at`: wall-clock timestamp (for logs)
/// - `title`: the payload itself
/// - `source`: optional name of the publishing source
///
/// Subscribers only ever see `&Event`, so one subscriber cannot mutate what the
/// next one observes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Notification title.
    pub title: Arc<str>,
    /// Name of the publishing source, if attached.
    pub source: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event with current timestamp and next sequence number.
    pub fn new(title: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            title: title.into(),
            source: None,
        }
    }

    /// Attaches the name of the publishing source.
    #[inline]
    pub fn with_source(mut self, source: impl Into<Arc<str>>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the notification title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl From<&str> for Event {
    fn from(title: &str) -> Self {
        Event::new(title)
    }
}

impl From<String> for Event {
    fn from(title: String) -> Self {
        Event::new(title)
    }
}

impl From<Arc<str>> for Event {
    fn from(title: Arc<str>) -> Self {
        Event::new(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new("a");
        let b = Event::new("b");
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_conversions_keep_title() {
        let from_str: Event = "v1".into();
        let from_string: Event = String::from("v2").into();
        assert_eq!(from_str.title(), "v1");
        assert_eq!(from_string.to_string(), "v2");
        assert!(from_str.source.is_none());
    }
}
