//! # Order Labels
//!
//! > **One printable label per line item, rendered in parallel.**
//!
//! This crate reads a retail order (JSON), lays out customer and item text on a
//! fixed-width canvas for every item, rasterizes it and writes `label_{index}.png`.
//! Fulfillment printers pick the files up one per item.
//!
//! ## 🏗️ Design
//!
//! ### Plan, then paint
//! A label is first computed as a [`LabelPlan`](layout::LabelPlan): canvas size plus
//! an ordered list of text draws, all positions taken from one
//! [`LayoutConfig`](config::LayoutConfig) table. Painting replays that list onto a
//! [`Canvas`](canvas::Canvas). Positions can be tested without a single font file.
//!
//! ### Bounded workers, typed results
//! Rendering runs on a [`WorkerPool`](framework::WorkerPool) sized to the machine,
//! fed through a bounded queue. Every item gets its own
//! `Result<SavedLabel, LabelError>` back, so a failing item is reported next to
//! the ones that succeeded instead of taking the process down with it.
//!
//! ### Shared, read-only inputs
//! The order is parsed once and shared behind an `Arc`. Font faces are loaded once
//! at startup and shared the same way; a missing font fails the run before any
//! label is attempted.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic [`WorkerJob`](framework::WorkerJob) / [`WorkerPool`](framework::WorkerPool) /
//! [`PoolClient`](framework::PoolClient), plus a scriptable
//! [`MockPool`](framework::mock::MockPool) for tests.
//!
//! ### 2. The Renderer ([`layout`], [`canvas`], [`fonts`])
//! Pure layout, the raster canvas and the shared font faces.
//!
//! ### 3. The Job ([`label_actor`], [`store`])
//! [`RenderJob`](label_actor::RenderJob) renders one item and saves it through a
//! [`LabelStore`](store::LabelStore).
//!
//! ### 4. The Orchestrator ([`scheduler`], [`lifecycle`], [`clients`])
//! Fan-out/join over all items of an order, timing, and pool startup/shutdown.
//!
//! ### 5. The Edges ([`model`], [`input`], [`config`], [`cli`])
//! The order document, how it is loaded, configuration and the command line.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Fonts (FreeMono.ttf, DejaVuSerif.ttf, FreeSans.ttf) in the current directory
//! order-labels order.json
//!
//! # Fonts elsewhere, labels into out/, with info logs on stderr
//! RUST_LOG=info order-labels order.json --font-dir /usr/share/fonts/truetype --output-dir out
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//!
//! # Pixel-level tests use the stock fonts or installed look-alikes; point them
//! # at a specific directory with LABEL_FONT_DIR
//! LABEL_FONT_DIR=/path/to/fonts cargo test
//! ```

pub mod canvas;
pub mod cli;
pub mod clients;
pub mod config;
pub mod fonts;
pub mod framework;
pub mod input;
pub mod label_actor;
pub mod layout;
pub mod lifecycle;
pub mod model;
pub mod scheduler;
pub mod store;
