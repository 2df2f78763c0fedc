//! Bounded watch daemon: poll a fixed receipt set until the time budget
//! expires, mailing a notification on every status transition.
//!
//! Inputs come from two files (paths configurable): the notification
//! address in `email.data` and one receipt number per line in
//! `receipts.data`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use casetrack_cli::{init_tracing, load_config_or_default};
use casetrack_core::{
    load_email, load_receipts, validate_config, BatchProcessor, MailNotifier, Notifier,
    StatusSource, UscisClient, WatchSession,
};

#[derive(Parser, Debug)]
#[command(
    name = "casetrack-watch",
    about = "Watch USCIS cases and mail on status change",
    version
)]
struct Args {
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

    let email = load_email(&config.files.email)
        .with_context(|| format!("Failed to load email address from {:?}", config.files.email))?;
    let receipts = load_receipts(&config.files.receipts).with_context(|| {
        format!("Failed to load receipt numbers from {:?}", config.files.receipts)
    })?;

    info!(
        receipts = receipts.len(),
        destination = %email,
        "Loaded watch inputs"
    );

    let client: Arc<dyn StatusSource> = Arc::new(UscisClient::new(config.tracker.clone()));
    let processor = BatchProcessor::new(client, config.tracker.request_delay());
    let notifier: Arc<dyn Notifier> = Arc::new(MailNotifier::new(&config.notifier.mail_command));

    let session = WatchSession::new(
        processor,
        notifier,
        email,
        receipts,
        config.watch.poll_interval(),
        config.watch.time_budget(),
    );

    let summary = session.run().await;
    info!(
        ticks = summary.ticks,
        notifications = summary.notifications,
        started_at = %summary.started_at,
        "Watch session complete"
    );

    Ok(())
}
