//! Hub core: registry, dispatch and outcome reporting.
//!
//! The main public type is [`NotificationHub`]; the rest of the module describes its
//! inputs and outputs.
//!
//! Internal modules:
//! - [`hub`]: subscriber registry and synchronous fan-out;
//! - [`config`]: hub settings;
//! - [`handle`]: opaque subscription handles;
//! - [`report`]: per-subscriber outcome list returned by `notify`.

mod config;
mod handle;
mod hub;
mod report;

pub use config::HubConfig;
pub use handle::SubscriptionId;
pub use hub::NotificationHub;
pub use report::{Delivery, NotifyReport};
