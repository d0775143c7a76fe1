//! # Mock Framework
//!
//! Utilities for testing code that submits jobs, without running real jobs.
//!
//! [`MockPool`] hands out an ordinary [`PoolClient`], but requests are answered
//! from scripted responses instead of by executing the job. Use it to drive the
//! scheduler through failures that are awkward to produce for real (a missing
//! output directory halfway through an order, a worker vanishing).
//!
//! ```ignore
//! let mock = MockPool::<RenderJob>::new();
//! mock.respond_ok(saved_label(0));
//! mock.respond_err(LabelError::Pool(FrameworkError::WorkerDropped));
//!
//! let client = LabelClient::new(mock.client());
//! // ... submit two jobs ...
//! mock.verify();
//! ```

use crate::framework::{FrameworkError, PoolClient, WorkRequest, WorkerJob};
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted reply for the next request, optionally matched against the job.
pub struct Expectation<J: WorkerJob> {
    matcher: Option<Box<dyn Fn(&J) -> bool + Send>>,
    response: Result<J::Output, J::Error>,
}

/// A pool stand-in that answers requests from a queue of expectations.
///
/// Expectations are consumed in the order requests arrive. A request that
/// arrives with no expectation left, or that fails its matcher, is answered
/// with [`FrameworkError::WorkerDropped`] and recorded as unexpected.
pub struct MockPool<J: WorkerJob> {
    client: PoolClient<J>,
    expectations: Arc<Mutex<VecDeque<Expectation<J>>>>,
    received: Arc<Mutex<Vec<String>>>,
    unexpected: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<J: WorkerJob> MockPool<J> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<WorkRequest<J>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<J>>>> = Arc::default();
        let received: Arc<Mutex<Vec<String>>> = Arc::default();
        let unexpected: Arc<Mutex<Vec<String>>> = Arc::default();

        let exps = Arc::clone(&expectations);
        let seen = Arc::clone(&received);
        let bad = Arc::clone(&unexpected);
        let handle = tokio::spawn(async move {
            while let Some(WorkRequest { job, respond_to }) = receiver.recv().await {
                let description = format!("{job:?}");
                seen.lock().expect("mock lock poisoned").push(description.clone());

                let next = exps.lock().expect("mock lock poisoned").pop_front();
                let response = match next {
                    Some(exp) if exp.matcher.as_ref().map_or(true, |m| m(&job)) => exp.response,
                    _ => {
                        bad.lock().expect("mock lock poisoned").push(description);
                        Err(FrameworkError::WorkerDropped.into())
                    }
                };
                let _ = respond_to.send(response);
            }
        });

        Self {
            client: PoolClient::new(sender),
            expectations,
            received,
            unexpected,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> PoolClient<J> {
        self.client.clone()
    }

    /// Answers the next request with `output`.
    pub fn respond_ok(&self, output: J::Output) {
        self.push(None, Ok(output));
    }

    /// Answers the next request with `error`.
    pub fn respond_err(&self, error: J::Error) {
        self.push(None, Err(error));
    }

    /// Answers the next request with `response` if `matcher` accepts the job.
    pub fn respond_when(
        &self,
        matcher: impl Fn(&J) -> bool + Send + 'static,
        response: Result<J::Output, J::Error>,
    ) {
        self.push(Some(Box::new(matcher)), response);
    }

    fn push(
        &self,
        matcher: Option<Box<dyn Fn(&J) -> bool + Send>>,
        response: Result<J::Output, J::Error>,
    ) {
        self.expectations
            .lock()
            .expect("mock lock poisoned")
            .push_back(Expectation { matcher, response });
    }

    /// Debug renderings of every job received so far, in arrival order.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().expect("mock lock poisoned").clone()
    }

    /// Panics unless every expectation was consumed and no request was unexpected.
    pub fn verify(&self) {
        let unexpected = self.unexpected.lock().expect("mock lock poisoned");
        if !unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", *unexpected);
        }
        let remaining = self.expectations.lock().expect("mock lock poisoned").len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl<J: WorkerJob> Default for MockPool<J> {
    fn default() -> Self {
        Self::new()
    }
}

impl<J: WorkerJob> Debug for MockPool<J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockPool")
            .field("received", &self.received())
            .finish()
    }
}
