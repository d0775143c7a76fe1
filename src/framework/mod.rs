//! Generic worker-pool framework.
//!
//! This module provides the building blocks for running typed jobs on a bounded
//! set of Tokio workers and collecting each job's result.
//!
//! # Main Components
//!
//! - [`WorkerJob`] - Trait that a unit of work implements to be run by a pool
//! - [`WorkerPool`] - Fixed-size set of workers draining one request queue
//! - [`PoolClient`] - Cloneable handle that submits jobs and awaits their replies
//! - [`FrameworkError`] - Errors raised by the plumbing rather than the job
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test submitters without running real jobs.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
