//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! Logs go to **stderr**. Stdout is reserved for the progress lines consumers
//! parse (`Label saved as: ...` and the final timing line), so turning logging up
//! never changes what a script reading stdout sees.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and one line per saved label
//! RUST_LOG=info order-labels order.json
//!
//! # Also show every job as it is picked up, with the worker span
//! RUST_LOG=debug order-labels order.json
//!
//! # Only this crate
//! RUST_LOG=order_labels=debug order-labels order.json
//! ```
//!
//! With `RUST_LOG=debug` a render reads like:
//!
//! ```text
//! DEBUG render_item{index=1 items=3}: Submitting render job
//! DEBUG worker{worker=0}: Job job_type="RenderJob" job=RenderJob { index: 1, item_count: 3, sku: Some("LATTE-16") }
//! INFO worker{worker=0}: Label saved index=1 path=./label_1.png width=150 height=230
//! ```
//!
//! When `RUST_LOG` is unset only warnings and errors are printed.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths - spans carry the context
        .compact() // Compact format shows spans inline (e.g., "worker:render_item")
        .init();
}
