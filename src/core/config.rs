//! # Hub configuration.
//!
//! Provides [`HubConfig`], the settings a [`NotificationHub`](crate::NotificationHub)
//! is constructed with.

use std::borrow::Cow;

/// Configuration for one notification hub.
///
/// ## Field semantics
/// - `name`: event source name, attached to log records
/// - `log_failures`: emit a `warn!` record for every captured subscriber failure
/// - `skip_removed`: skip subscribers unsubscribed while a dispatch is in progress
///
/// ## Notes
/// All fields are public for flexibility; `Default` gives a sensible baseline.
#[derive(Clone, Debug)]
pub struct HubConfig {
    /// Name of the event source this hub publishes for.
    pub name: Cow<'static, str>,

    /// Whether captured subscriber failures are logged at WARN level.
    ///
    /// Failures are always recorded in the report regardless of this flag.
    pub log_failures: bool,

    /// Re-check each subscriber right before it is visited.
    ///
    /// - `true`: a subscriber unsubscribed mid-dispatch (before its turn) is skipped
    ///   and does not appear in the report
    /// - `false`: the dispatch delivers to the whole snapshot taken at entry, so a
    ///   subscriber removed before its turn still receives that one event. This gives up
    ///   the "removed before visited is not notified" guarantee in exchange for one
    ///   lock acquisition less per visited subscriber; use it only when that is acceptable.
    ///
    /// Subscribers added mid-dispatch are never part of the running dispatch.
    pub skip_removed: bool,
}

impl HubConfig {
    /// Returns a default configuration with the given hub name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for HubConfig {
    /// Default configuration:
    ///
    /// - `name = "hub"`
    /// - `log_failures = true`
    /// - `skip_removed = true`
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("hub"),
            log_failures: true,
            skip_removed: true,
        }
    }
}
