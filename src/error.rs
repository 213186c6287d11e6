//! Error types used by the notification hub and its subscribers.
//!
//! This module defines two error enums:
//!
//! - [`HubError`] — errors returned by hub operations themselves.
//! - [`SubscriberFailure`] — what a single subscriber delivery raised.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.

use thiserror::Error;

use crate::core::SubscriptionId;

/// # Errors produced by the notification hub.
///
/// These are recoverable and have no side effect on the hub state.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HubError {
    /// The handle was never issued by this hub or was already unsubscribed.
    #[error("unknown subscriber {id}")]
    UnknownSubscriber {
        /// The handle that was not found.
        id: SubscriptionId,
    },
}

impl HubError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use notifyhub::{HubError, NotificationHub};
    ///
    /// let hub = NotificationHub::default();
    /// let id = hub.subscribe_fn("noop", |_| Ok(()));
    /// hub.unsubscribe(id).unwrap();
    ///
    /// let err = hub.unsubscribe(id).unwrap_err();
    /// assert_eq!(err.as_label(), "hub_unknown_subscriber");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HubError::UnknownSubscriber { .. } => "hub_unknown_subscriber",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HubError::UnknownSubscriber { id } => {
                format!("subscription {id} is not registered")
            }
        }
    }
}

/// # Failure raised by one subscriber during a dispatch.
///
/// Recorded against that subscriber in the [`NotifyReport`](crate::NotifyReport);
/// never a failure of `notify` as a whole.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscriberFailure {
    /// The subscriber returned an error from `receive`.
    #[error("delivery failed: {error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },

    /// The subscriber panicked inside `receive`; the panic was caught by the hub.
    #[error("subscriber panicked: {info}")]
    Panicked {
        /// Panic payload text.
        info: String,
    },
}

impl SubscriberFailure {
    /// Builds a [`SubscriberFailure::Failed`] from any displayable error.
    ///
    /// # Example
    /// ```
    /// use notifyhub::SubscriberFailure;
    ///
    /// let err = SubscriberFailure::fail("mailbox full");
    /// assert_eq!(err.to_string(), "delivery failed: mailbox full");
    /// ```
    pub fn fail(error: impl std::fmt::Display) -> Self {
        SubscriberFailure::Failed {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SubscriberFailure::Failed { .. } => "subscriber_failed",
            SubscriberFailure::Panicked { .. } => "subscriber_panicked",
        }
    }

    /// Returns a human-readable message with details about the failure.
    pub fn as_message(&self) -> String {
        match self {
            SubscriberFailure::Failed { error } => format!("error: {error}"),
            SubscriberFailure::Panicked { info } => format!("panic: {info}"),
        }
    }

    /// Indicates whether the failure came from a caught panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, SubscriberFailure::Panicked { .. })
    }

    /// Converts a caught panic payload into [`SubscriberFailure::Panicked`].
    pub(crate) fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let info = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "unknown panic".to_string()
        };
        SubscriberFailure::Panicked { info }
    }
}
