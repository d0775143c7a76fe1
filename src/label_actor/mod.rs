//! Label rendering jobs and the pool that runs them.

pub mod error;
pub mod job;

pub use error::*;
pub use job::*;

use crate::clients::LabelClient;
use crate::framework::WorkerPool;

/// Creates a render pool with `workers` workers and a queue of `queue_capacity`,
/// plus the client that feeds it.
pub fn new(workers: usize, queue_capacity: usize) -> (WorkerPool<RenderJob>, LabelClient) {
    let (pool, generic_client) = WorkerPool::new(workers, queue_capacity);
    let client = LabelClient::new(generic_client);
    (pool, client)
}
