//! # Fan-out / Join
//!
//! [`render_order`] starts one lightweight task per item, lets the render pool
//! decide how many actually run at once, and waits for all of them.
//!
//! Each task reports its own `Result`, so one bad item never hides the others:
//! the caller gets a [`BatchReport`] with an outcome per item and the wall-clock
//! time of the fan-out/join window (input loading is not included).

use crate::clients::LabelClient;
use crate::label_actor::{LabelError, SavedLabel};
use crate::model::Order;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing::{info, warn};

/// The result of rendering one item.
#[derive(Debug)]
pub struct LabelOutcome {
    pub index: usize,
    pub result: Result<SavedLabel, LabelError>,
}

/// Per-item outcomes of one order, sorted by item index, plus elapsed time.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<LabelOutcome>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn saved(&self) -> impl Iterator<Item = &SavedLabel> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (usize, &LabelError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.index, e)))
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// The final stdout line, only for a batch where every label was saved.
    pub fn completion_line(&self) -> Option<String> {
        self.is_success()
            .then(|| format!("All labels created: time (ms): {}", self.elapsed_ms()))
    }
}

/// Renders every item of `order` through `client` and waits for all of them.
pub async fn render_order(client: &LabelClient, order: Arc<Order>) -> BatchReport {
    let item_count = order.item_count();
    info!(items = item_count, "Rendering order");

    let start = Instant::now();
    let mut tasks = JoinSet::new();
    for index in 0..item_count {
        let client = client.clone();
        let order = Arc::clone(&order);
        tasks.spawn(async move { (index, client.render_item(order, index).await) });
    }

    let mut outcomes = Vec::with_capacity(item_count);
    let mut lost = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => outcomes.push(LabelOutcome { index, result }),
            Err(e) => lost.push(e),
        }
    }
    let elapsed = start.elapsed();

    if !lost.is_empty() {
        attribute_lost_tasks(&mut outcomes, lost, item_count);
    }
    outcomes.sort_by_key(|o| o.index);

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(
        items = item_count,
        failed,
        elapsed_ms = elapsed.as_millis() as u64,
        "Order rendered"
    );

    BatchReport { outcomes, elapsed }
}

/// A task that panicked never returned its index; give each lost task one of the
/// indices nobody reported.
fn attribute_lost_tasks(
    outcomes: &mut Vec<LabelOutcome>,
    lost: Vec<tokio::task::JoinError>,
    item_count: usize,
) {
    let mut reported = vec![false; item_count];
    for outcome in outcomes.iter() {
        reported[outcome.index] = true;
    }
    let missing = (0..item_count).filter(|i| !reported[*i]);
    for (index, err) in missing.zip(lost) {
        warn!(index, error = %err, "Render task lost");
        outcomes.push(LabelOutcome {
            index,
            result: Err(err.into()),
        });
    }
}
