use crate::framework::PoolClient;
use crate::label_actor::{LabelError, RenderJob, SavedLabel};
use crate::model::Order;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for submitting label renders to the render pool.
#[derive(Clone)]
pub struct LabelClient {
    inner: PoolClient<RenderJob>,
}

impl LabelClient {
    pub fn new(inner: PoolClient<RenderJob>) -> Self {
        Self { inner }
    }

    /// Renders and saves the label for the item at `index`, waiting for a free worker.
    #[instrument(skip(self, order), fields(items = order.item_count()))]
    pub async fn render_item(
        &self,
        order: Arc<Order>,
        index: usize,
    ) -> Result<SavedLabel, LabelError> {
        debug!("Submitting render job");
        self.inner.submit(RenderJob::new(order, index)).await
    }
}
