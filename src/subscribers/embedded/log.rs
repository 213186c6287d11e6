//! # LogWriter — event printer over `tracing`
//!
//! A minimal subscriber that writes every incoming [`Event`] at INFO level.
//! Use it for demos or as a catch-all audit trail.
//!
//! ## Example output (with `tracing_subscriber::fmt`)
//! ```text
//! INFO notifyhub: alice received notification: New Go Tutorial seq=3 source="go-channel"
//! ```

use std::borrow::Cow;

use crate::error::SubscriberFailure;
use crate::events::Event;
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Debug, Clone)]
pub struct LogWriter {
    name: Cow<'static, str>,
}

impl LogWriter {
    /// Construct a new [`LogWriter`] reporting under `name`.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new("LogWriter")
    }
}

impl Subscribe for LogWriter {
    fn receive(&self, e: &Event) -> Result<(), SubscriberFailure> {
        tracing::info!(
            seq = e.seq,
            source = e.source.as_deref().unwrap_or("-"),
            "{} received notification: {}",
            self.name,
            e.title
        );
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_writer_never_fails() {
        let w = LogWriter::new("alice");
        assert_eq!(w.name(), "alice");
        assert!(w.receive(&Event::new("New Go Tutorial")).is_ok());
        assert_eq!(LogWriter::default().name(), "LogWriter");
    }
}
