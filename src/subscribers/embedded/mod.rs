//! # Built-in subscribers
//!
//! Small, self-contained implementations useful for demos and bridging.
//!
//! - [`LogWriter`]: writes events through `tracing` (feature `logging`).
//! - [`ChannelForwarder`]: republishes events into a tokio broadcast channel
//!   (feature `broadcast`).

#[cfg(feature = "broadcast")]
mod channel;
#[cfg(feature = "logging")]
mod log;

#[cfg(feature = "broadcast")]
pub use channel::ChannelForwarder;
#[cfg(feature = "logging")]
pub use log::LogWriter;
