//! # Example: channel
//!
//! A video channel announces new uploads to its viewers.
//!
//! Shows how to:
//! - Create a named [`NotificationHub`] and register viewers.
//! - Implement the [`Subscribe`] trait for a custom viewer.
//! - Read the per-viewer [`NotifyReport`] when one viewer fails.
//! - Unsubscribe with the handle returned at registration.
//!
//! ## Flow
//! ```text
//! NotificationHub::named("go-channel")
//!     ├─► subscribe(Viewer alice)  ─► h1
//!     ├─► subscribe(Viewer bob)    ─► h2
//!     ├─► subscribe(LogWriter)     ─► h3
//!     ├─► subscribe_fn("mallory")  ─► h4  (always fails)
//!     ├─► notify("New Go Tutorial") ─► report [h1 ok, h2 ok, h3 ok, h4 err]
//!     ├─► unsubscribe(h1)
//!     └─► notify("Generics Deep Dive") ─► report [h2 ok, h3 ok, h4 err]
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example channel
//! ```

use notifyhub::{Event, LogWriter, NotificationHub, NotifyReport, Subscribe, SubscriberFailure};

/// A viewer that prints every announcement it receives.
struct Viewer {
    name: &'static str,
}

impl Subscribe for Viewer {
    fn receive(&self, ev: &Event) -> Result<(), SubscriberFailure> {
        println!(
            "{} received notification for new video: {}",
            self.name,
            ev.title()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn print_report(report: &NotifyReport) {
    for d in report {
        match &d.outcome {
            Ok(()) => println!("  {} {:<10} ok", d.id, d.name),
            Err(e) => println!("  {} {:<10} {}", d.id, d.name, e),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notifyhub=info".into()),
        )
        .init();

    let channel = NotificationHub::named("go-channel");

    let alice = channel.subscribe(Viewer { name: "alice" });
    channel.subscribe(Viewer { name: "bob" });
    channel.subscribe(LogWriter::new("audit"));
    channel.subscribe_fn("mallory", |_| Err(SubscriberFailure::fail("notifications disabled")));

    println!("\n--- upload #1 ---");
    let source = channel.name().to_owned();
    let report = channel.notify(Event::new("New Go Tutorial").with_source(source));
    print_report(&report);

    channel.unsubscribe(alice)?;

    println!("\n--- upload #2 ---");
    let report = channel.notify("Generics Deep Dive");
    print_report(&report);

    println!(
        "\ndelivered {}/{} ({} failed)",
        report.delivered(),
        report.len(),
        report.failures().count()
    );
    Ok(())
}
