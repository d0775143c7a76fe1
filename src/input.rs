//! Reading the order document from disk.

use crate::model::Order;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Errors raised while loading the input order.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Error opening {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Opens, reads and parses the order at `path`.
pub async fn load_order(path: &Path) -> Result<Order, InputError> {
    let mut file = tokio::fs::File::open(path)
        .await
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .await
        .map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), bytes = text.len(), "Order read");

    let order = parse_order(&text)?;
    info!(path = %path.display(), items = order.item_count(), "Order loaded");
    Ok(order)
}

/// Parses an order from its JSON text.
pub fn parse_order(text: &str) -> Result<Order, InputError> {
    Ok(serde_json::from_str(text)?)
}
