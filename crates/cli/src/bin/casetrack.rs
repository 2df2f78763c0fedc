//! One-shot batch checker: generate a receipt sequence, poll each case
//! once, optionally print per-case statuses and the aggregate pass ratio.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::error;

use casetrack_cli::{init_tracing, load_config_or_default};
use casetrack_core::{
    generate_sequence, validate_config, BatchProcessor, StatusSource, UscisClient,
};

#[derive(Parser, Debug)]
#[command(name = "casetrack", about = "USCIS case status batch checker", version)]
struct Args {
    /// Start receipt number
    #[arg(short, long, default_value = "YSC2090175300")]
    start: String,

    /// Number of cases tracked
    #[arg(short, long, default_value_t = 2)]
    number: usize,

    /// Print status of every case
    #[arg(short, long)]
    verbal: bool,

    /// Print aggregate pass statistics
    #[arg(short, long)]
    ratio: bool,

    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config_or_default(args.config.as_deref())?;
    validate_config(&config).context("Configuration validation failed")?;

    let receipts = generate_sequence(&args.start, args.number)
        .map_err(|e| anyhow!("Invalid receipt number {}: {}", args.start, e))?;

    let client: Arc<dyn StatusSource> = Arc::new(UscisClient::new(config.tracker.clone()));
    let processor = BatchProcessor::new(client, config.tracker.request_delay());

    let report = processor.process(&receipts, args.verbal).await;

    if args.ratio {
        let stats = report
            .statistics()
            .context("Cannot report statistics for an empty batch")?;
        println!("total number of cases is {}", stats.total);
        println!("total number of passed cases is {}", stats.passed);
        println!("pass ratio is {:.2}%", stats.ratio);
    }

    Ok(())
}
