//! Error types for label rendering.

use crate::canvas::CanvasError;
use crate::config::ConfigError;
use crate::fonts::FontError;
use crate::framework::FrameworkError;
use crate::input::InputError;
use thiserror::Error;

/// Errors that can occur while producing labels for an order.
#[derive(Debug, Error)]
pub enum LabelError {
    /// The order document could not be opened, read, or parsed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The configuration file is unreadable or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A font face could not be loaded.
    #[error(transparent)]
    Font(#[from] FontError),

    /// Drawing or PNG encoding failed.
    #[error("Raster export failed: {0}")]
    Canvas(#[from] CanvasError),

    /// The encoded label could not be written.
    #[error("Error saving {file_name}: {source}")]
    Store {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    /// The item index does not exist in the order.
    #[error("Item index {index} out of range for order with {item_count} items")]
    ItemOutOfRange { index: usize, item_count: usize },

    /// The render pool could not deliver the job or its result.
    #[error("Worker pool error: {0}")]
    Pool(#[from] FrameworkError),

    /// A render task panicked or was cancelled before reporting.
    #[error("Render task failed: {0}")]
    TaskPanicked(String),
}

impl From<tokio::task::JoinError> for LabelError {
    fn from(err: tokio::task::JoinError) -> Self {
        LabelError::TaskPanicked(err.to_string())
    }
}
