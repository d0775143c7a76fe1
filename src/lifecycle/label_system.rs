use crate::clients::LabelClient;
use crate::config::LabelConfig;
use crate::fonts::FontSet;
use crate::label_actor::{LabelError, RenderContext};
use crate::model::Order;
use crate::scheduler::{render_order, BatchReport};
use crate::store::{DirStore, LabelStore};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime that turns orders into labels.
///
/// `LabelSystem` is responsible for:
/// - **Shared resources**: loading the font faces once and handing them to every worker
/// - **Lifecycle Management**: starting the render pool and shutting it down
/// - **Fan-out**: running one render per item through [`render_order`]
///
/// # Example
///
/// ```ignore
/// let system = LabelSystem::new(LabelConfig::default())?;
/// let report = system.render(Arc::new(order)).await;
/// println!("All labels created: time (ms): {}", report.elapsed_ms());
/// system.shutdown().await?;
/// ```
pub struct LabelSystem {
    /// Client for submitting renders to the pool
    pub label_client: LabelClient,

    /// Task handle of the running pool (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl LabelSystem {
    /// Creates a system that writes into `config.output_dir`.
    ///
    /// # Errors
    ///
    /// Fails before any rendering starts if a font face cannot be loaded.
    pub fn new(config: LabelConfig) -> Result<Self, LabelError> {
        let store = Arc::new(DirStore::new(config.output_dir.clone()));
        Self::with_store(config, store)
    }

    /// Creates a system that persists labels through `store`.
    pub fn with_store(
        config: LabelConfig,
        store: Arc<dyn LabelStore>,
    ) -> Result<Self, LabelError> {
        let fonts = FontSet::load(&config.font_dir, &config.fonts)?;
        Ok(Self::with_fonts(config, Arc::new(fonts), store))
    }

    /// Creates a system from already loaded fonts.
    pub fn with_fonts(
        config: LabelConfig,
        fonts: Arc<FontSet>,
        store: Arc<dyn LabelStore>,
    ) -> Self {
        let workers = config.worker_count();
        let (pool, label_client) = crate::label_actor::new(workers, config.queue_capacity);

        let context = RenderContext {
            fonts,
            layout: config.layout,
            store,
        };
        let handle = tokio::spawn(pool.run(context));
        info!(workers, "Label system started");

        Self {
            label_client,
            handle,
        }
    }

    /// Renders one label per item of `order` and waits for all of them.
    pub async fn render(&self, order: Arc<Order>) -> BatchReport {
        render_order(&self.label_client, order).await
    }

    /// Gracefully shuts down the render pool.
    ///
    /// Dropping the client closes the request queue; the workers finish what is
    /// queued and exit.
    pub async fn shutdown(self) -> Result<(), LabelError> {
        info!("Shutting down label system...");
        drop(self.label_client);

        if let Err(e) = self.handle.await {
            error!("Render pool failed: {:?}", e);
            return Err(e.into());
        }

        info!("Label system shutdown complete.");
        Ok(())
    }
}
