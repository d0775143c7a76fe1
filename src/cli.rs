//! Command-line surface of the `order-labels` binary.
//!
//! The only required argument is the order document. Everything else overrides
//! [`LabelConfig`] values and can be left out.

use crate::config::{load_config, LabelConfig};
use crate::input::load_order;
use crate::label_actor::LabelError;
use crate::lifecycle::LabelSystem;
use crate::scheduler::BatchReport;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// Render one PNG label per item of a retail order
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the order JSON document
    #[arg(help = "Path to the input order (JSON)")]
    pub input: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the label files are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Directory the font files are loaded from
    #[arg(long)]
    pub font_dir: Option<PathBuf>,

    /// Number of render workers (defaults to the number of CPUs)
    #[arg(short, long)]
    pub workers: Option<usize>,
}

impl Args {
    /// Loads the configuration file (if any) and applies the flag overrides on top.
    pub fn resolve_config(&self) -> Result<LabelConfig, LabelError> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(dir) = &self.font_dir {
            config.font_dir = dir.clone();
        }
        if self.workers.is_some() {
            config.workers = self.workers;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Loads the order, renders every label and shuts the pool down.
///
/// Errors returned here happen before any label is attempted (bad config,
/// unreadable input, missing font). Per-label failures are in the report.
pub async fn run(args: &Args) -> Result<BatchReport, LabelError> {
    let config = args.resolve_config()?;
    let order = load_order(&args.input).await?;

    let system = LabelSystem::new(config)?;
    let report = system.render(Arc::new(order)).await;
    system.shutdown().await?;
    Ok(report)
}
