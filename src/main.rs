//! # order-labels
//!
//! Reads one order document and writes `label_{index}.png` for each of its items.
//!
//! Stdout carries one `Label saved as: {file}` line per label, in completion
//! order, followed by `All labels created: time (ms): {n}` once every label is
//! saved. If any label failed, the failures go to stderr instead of that line
//! and the process exits non-zero. Logs go to stderr (see [`setup_tracing`]).

use clap::Parser;
use order_labels::cli::{run, Args};
use order_labels::lifecycle::setup_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let args = Args::parse();
    info!(input = %args.input.display(), "Starting label run");

    let report = run(&args).await.map_err(|e| e.to_string())?;

    let total = report.outcomes.len();
    let mut failed = 0;
    for (index, e) in report.failures() {
        error!(index, error = %e, "Label failed");
        failed += 1;
    }
    let Some(line) = report.completion_line() else {
        return Err(format!("{failed} of {total} labels failed"));
    };

    println!("{line}");
    info!(labels = total, "Run completed successfully");
    Ok(())
}
