//! # Core Worker Framework
//!
//! This module defines the generic building blocks for running jobs on a
//! bounded pool of workers.
//!
//! ## Key Types
//!
//! - [`WorkerJob`]: The trait that every unit of work must implement.
//! - [`WorkerPool`]: The server side. A fixed number of workers drain one request queue.
//! - [`PoolClient`]: The cloneable client side. Submits a job and awaits its typed reply.
//! - [`FrameworkError`]: Common errors (e.g., PoolClosed, WorkerDropped).

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, info, warn, Instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any unit of work must implement to be run by a [`WorkerPool`].
///
/// # Context
/// The `Context` is handed to the pool once, in [`WorkerPool::run`], and shared by
/// reference with every job. Put read-only dependencies (fonts, output targets) there
/// instead of cloning them into each job.
///
/// # Errors
/// `Error` must absorb [`FrameworkError`] so that a caller sees one error type
/// whether the job itself failed or the pool could not deliver it.
#[async_trait]
pub trait WorkerJob: Send + Debug + 'static {
    /// The value produced by a successful run.
    type Output: Send + Debug + 'static;

    /// The job-specific error type.
    type Error: std::error::Error + From<FrameworkError> + Send + 'static;

    /// Shared, read-only dependencies for all jobs on one pool.
    type Context: Send + Sync + 'static;

    /// Executes the job.
    async fn execute(self, ctx: &Self::Context) -> Result<Self::Output, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the worker framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Worker pool closed")]
    PoolClosed,
    #[error("Worker dropped response channel")]
    WorkerDropped,
}

/// Type alias for the one-shot response channel used by workers.
pub type Response<J> = oneshot::Sender<Result<<J as WorkerJob>::Output, <J as WorkerJob>::Error>>;

/// A job waiting in the queue together with where to send its result.
#[derive(Debug)]
pub struct WorkRequest<J: WorkerJob> {
    pub job: J,
    pub respond_to: Response<J>,
}

// =============================================================================
// 3. THE GENERIC POOL SERVER
// =============================================================================

/// A fixed-size set of workers sharing one bounded request queue.
///
/// # Concurrency Model
/// At most `size` jobs run at once no matter how many are submitted; the rest wait
/// in the queue (and, once the queue is full, in [`PoolClient::submit`]). Workers
/// take turns pulling from the shared receiver, so jobs start in submission order
/// but may finish in any order.
pub struct WorkerPool<J: WorkerJob> {
    receiver: Arc<Mutex<mpsc::Receiver<WorkRequest<J>>>>,
    size: usize,
}

impl<J: WorkerJob> WorkerPool<J> {
    /// Creates a pool and the client used to feed it.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of workers, clamped to at least one.
    /// * `buffer_size` - Capacity of the request queue.
    pub fn new(size: usize, buffer_size: usize) -> (Self, PoolClient<J>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let pool = Self {
            receiver: Arc::new(Mutex::new(receiver)),
            size: size.max(1),
        };
        (pool, PoolClient::new(sender))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Runs the workers until every [`PoolClient`] has been dropped and the queue
    /// is drained.
    ///
    /// A worker that panics is logged; the remaining workers keep serving the queue.
    pub async fn run(self, context: J::Context) {
        let job_type = std::any::type_name::<J>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(job_type, workers = self.size, "Pool started");

        let context = Arc::new(context);
        let mut workers = JoinSet::new();
        for worker in 0..self.size {
            let receiver = Arc::clone(&self.receiver);
            let context = Arc::clone(&context);
            let span = tracing::debug_span!("worker", worker);
            workers.spawn(worker_loop(receiver, context, job_type).instrument(span));
        }

        let mut processed = 0usize;
        while let Some(result) = workers.join_next().await {
            match result {
                Ok(count) => processed += count,
                Err(e) => warn!(job_type, error = %e, "Worker task failed"),
            }
        }
        info!(job_type, processed, "Shutdown");
    }
}

async fn worker_loop<J: WorkerJob>(
    receiver: Arc<Mutex<mpsc::Receiver<WorkRequest<J>>>>,
    context: Arc<J::Context>,
    job_type: &'static str,
) -> usize {
    let mut processed = 0;
    loop {
        // Hold the lock only while waiting for the next request.
        let next = receiver.lock().await.recv().await;
        let Some(WorkRequest { job, respond_to }) = next else {
            break;
        };

        debug!(job_type, ?job, "Job");
        let result = job.execute(&context).await;
        match &result {
            Ok(output) => debug!(job_type, ?output, "Job ok"),
            Err(e) => warn!(job_type, error = %e, "Job failed"),
        }
        processed += 1;
        let _ = respond_to.send(result);
    }
    processed
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for submitting jobs to a [`WorkerPool`].
pub struct PoolClient<J: WorkerJob> {
    sender: mpsc::Sender<WorkRequest<J>>,
}

impl<J: WorkerJob> Clone for PoolClient<J> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<J: WorkerJob> PoolClient<J> {
    pub fn new(sender: mpsc::Sender<WorkRequest<J>>) -> Self {
        Self { sender }
    }

    /// Queues `job` and waits for a worker to finish it.
    pub async fn submit(&self, job: J) -> Result<J::Output, J::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(WorkRequest { job, respond_to })
            .await
            .map_err(|_| FrameworkError::PoolClosed)?;
        response.await.map_err(|_| FrameworkError::WorkerDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum SleepError {
        #[error("negative")]
        Negative,
        #[error(transparent)]
        Framework(#[from] FrameworkError),
    }

    #[derive(Debug)]
    struct Sleep(i64);

    #[derive(Default)]
    struct Gauge {
        running: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl WorkerJob for Sleep {
        type Output = i64;
        type Error = SleepError;
        type Context = Arc<Gauge>;

        async fn execute(self, gauge: &Arc<Gauge>) -> Result<i64, SleepError> {
            if self.0 < 0 {
                return Err(SleepError::Negative);
            }
            let now = gauge.running.fetch_add(1, Ordering::SeqCst) + 1;
            gauge.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(self.0 as u64)).await;
            gauge.running.fetch_sub(1, Ordering::SeqCst);
            Ok(self.0 * 2)
        }
    }

    #[tokio::test]
    async fn test_submit_returns_typed_result() {
        let (pool, client) = WorkerPool::<Sleep>::new(2, 4);
        let handle = tokio::spawn(pool.run(Arc::default()));

        assert_eq!(client.submit(Sleep(1)).await, Ok(2));
        assert_eq!(client.submit(Sleep(-1)).await, Err(SleepError::Negative));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded_by_pool_size() {
        let gauge = Arc::new(Gauge::default());
        let (pool, client) = WorkerPool::<Sleep>::new(3, 2);
        let handle = tokio::spawn(pool.run(Arc::clone(&gauge)));

        let mut set = JoinSet::new();
        for _ in 0..12 {
            let client = client.clone();
            set.spawn(async move { client.submit(Sleep(5)).await });
        }
        while let Some(res) = set.join_next().await {
            assert_eq!(res.unwrap(), Ok(10));
        }

        drop(client);
        handle.await.unwrap();
        let peak = gauge.peak.load(Ordering::SeqCst);
        assert!((1..=3).contains(&peak), "peak concurrency was {peak}");
    }

    #[tokio::test]
    async fn test_submit_after_shutdown_fails() {
        let (pool, client) = WorkerPool::<Sleep>::new(1, 1);
        drop(pool);
        assert_eq!(
            client.submit(Sleep(0)).await,
            Err(SleepError::Framework(FrameworkError::PoolClosed))
        );
    }
}
