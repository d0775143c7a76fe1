//! [`WorkerJob`] implementation that renders and saves one label.
//!
//! A [`RenderJob`] names an item by its position in a shared, read-only order.
//! Workers execute it against a [`RenderContext`] holding everything that is
//! the same for every label: fonts, layout table and the output store.

use crate::canvas::{encode_png, CanvasError};
use crate::config::LayoutConfig;
use crate::fonts::FontSet;
use crate::framework::WorkerJob;
use crate::label_actor::LabelError;
use crate::layout::plan_label;
use crate::model::Order;
use crate::store::LabelStore;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// File name of the label for the item at zero-based `index`.
pub fn label_file_name(index: usize) -> String {
    format!("label_{index}.png")
}

/// Render the item at `index` of `order`.
#[derive(Clone)]
pub struct RenderJob {
    pub order: Arc<Order>,
    pub index: usize,
}

impl RenderJob {
    pub fn new(order: Arc<Order>, index: usize) -> Self {
        Self { order, index }
    }
}

impl std::fmt::Debug for RenderJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderJob")
            .field("index", &self.index)
            .field("item_count", &self.order.item_count())
            .field(
                "sku",
                &self.order.items.get(self.index).map(|i| i.sku_number.as_str()),
            )
            .finish()
    }
}

/// Dependencies shared by every render worker.
pub struct RenderContext {
    pub fonts: Arc<FontSet>,
    pub layout: LayoutConfig,
    pub store: Arc<dyn LabelStore>,
}

/// A label that was rendered and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedLabel {
    pub index: usize,
    pub file_name: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[async_trait]
impl WorkerJob for RenderJob {
    type Output = SavedLabel;
    type Error = LabelError;
    type Context = RenderContext;

    async fn execute(self, ctx: &RenderContext) -> Result<SavedLabel, LabelError> {
        let item_count = self.order.item_count();
        let item = self
            .order
            .items
            .get(self.index)
            .ok_or(LabelError::ItemOutOfRange {
                index: self.index,
                item_count,
            })?;

        let plan = plan_label(
            self.index,
            item_count,
            &self.order.customer,
            item,
            &ctx.layout,
        );
        let (width, height) = (plan.width, plan.height);

        // Glyph rasterization and PNG encoding are CPU-bound.
        let fonts = Arc::clone(&ctx.fonts);
        let png = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, CanvasError> {
            let image = plan.rasterize(&fonts)?;
            encode_png(&image)
        })
        .await??;

        let file_name = label_file_name(self.index);
        let path = ctx
            .store
            .save(&file_name, png)
            .await
            .map_err(|source| LabelError::Store {
                file_name: file_name.clone(),
                source,
            })?;

        println!("Label saved as: {file_name}");
        info!(index = self.index, path = %path.display(), width, height, "Label saved");

        Ok(SavedLabel {
            index: self.index,
            file_name,
            path,
            width,
            height,
        })
    }
}
