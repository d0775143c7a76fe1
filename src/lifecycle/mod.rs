//! # System Lifecycle & Orchestration
//!
//! This module owns the runtime pieces that live for the whole process:
//!
//! 1. **Shared resources** - font faces parsed once and shared read-only
//! 2. **Pool startup** - the render [`WorkerPool`](crate::framework::WorkerPool) spawned with its context
//! 3. **Graceful Shutdown** - drop the client, let workers drain, await the pool
//! 4. **Observability Setup** - [`setup_tracing`]
//!
//! ## The LabelSystem Pattern
//!
//! ```rust,ignore
//! let (pool, label_client) = label_actor::new(workers, queue_capacity);
//! let handle = tokio::spawn(pool.run(RenderContext { fonts, layout, store }));
//! // ... label_client.render_item(order, index) ...
//! drop(label_client);
//! handle.await?;
//! ```
//!
//! Dependencies are injected into the pool at `run(context)` time, not at
//! construction, so tests can build a pool first and hand it a context made of
//! in-memory stores or preloaded fonts.

pub mod label_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use label_system::*;
