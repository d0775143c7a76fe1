//! Type-safe wrappers around [`PoolClient`](crate::framework::PoolClient).

pub mod label_client;

pub use label_client::*;
