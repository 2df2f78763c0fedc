//! Bounded-duration watch sessions with transition notification.
//!
//! A watch session polls a fixed set of receipt numbers until a time budget
//! runs out, keeping a short per-receipt history of distinct statuses. When
//! a history grows past one entry a transition has occurred: the notifier
//! is invoked once and the history collapses back to the newest status, so
//! rapid flapping produces one message per detected change rather than a
//! queue of repeats.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::batch::BatchProcessor;
use crate::notify::Notifier;
use crate::receipt::ReceiptNumber;

/// Subject line for transition notifications.
pub const NOTIFICATION_SUBJECT: &str = "status change";

/// Lifecycle state of a watch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Running,
    Expired,
}

/// Outcome of a completed watch session.
#[derive(Debug, Clone)]
pub struct WatchSummary {
    /// Terminal state; always `Expired` for a session that ran to its budget.
    pub state: WatchState,
    /// Number of full batch passes performed.
    pub ticks: u64,
    /// Number of transitions for which the notifier was invoked. Counts
    /// invocations, not deliveries: a failed send still counts.
    pub notifications: u64,
    /// When the session started.
    pub started_at: DateTime<Utc>,
}

/// A bounded-duration polling session over a fixed receipt set.
pub struct WatchSession {
    processor: BatchProcessor,
    notifier: Arc<dyn Notifier>,
    destination: String,
    receipts: Vec<ReceiptNumber>,
    poll_interval: Duration,
    time_budget: Duration,
    /// Distinct consecutive statuses per receipt, aligned with `receipts`.
    history: Vec<Vec<String>>,
}

impl WatchSession {
    pub fn new(
        processor: BatchProcessor,
        notifier: Arc<dyn Notifier>,
        destination: impl Into<String>,
        receipts: Vec<ReceiptNumber>,
        poll_interval: Duration,
        time_budget: Duration,
    ) -> Self {
        let history = vec![Vec::new(); receipts.len()];
        Self {
            processor,
            notifier,
            destination: destination.into(),
            receipts,
            poll_interval,
            time_budget,
            history,
        }
    }

    /// Run the session to expiry and return a summary.
    ///
    /// Elapsed time is logical: the configured interval accumulated once
    /// per tick, so the tick count for a given budget is deterministic.
    pub async fn run(mut self) -> WatchSummary {
        let started_at = Utc::now();
        let mut elapsed = Duration::ZERO;
        let mut ticks = 0u64;
        let mut notifications = 0u64;

        info!(
            receipts = self.receipts.len(),
            poll_interval_secs = self.poll_interval.as_secs(),
            time_budget_secs = self.time_budget.as_secs(),
            "Starting watch session"
        );

        while elapsed < self.time_budget {
            ticks += 1;
            info!(tick = ticks, elapsed_secs = elapsed.as_secs(), "Watch pass");

            let report = self.processor.process(&self.receipts, true).await;

            for (idx, result) in report.results.iter().enumerate() {
                let history = &mut self.history[idx];
                let changed = history.last().map(|last| last != &result.status);
                if changed.unwrap_or(true) {
                    history.push(result.status.clone());
                }

                if history.len() > 1 {
                    let message = format!(
                        "Status of {} changes from {} to {}.",
                        self.receipts[idx],
                        history[0],
                        history[history.len() - 1]
                    );
                    info!(receipt = %self.receipts[idx], "Status transition detected");
                    notifications += 1;
                    if let Err(e) = self
                        .notifier
                        .send(&self.destination, NOTIFICATION_SUBJECT, &message)
                        .await
                    {
                        warn!(
                            receipt = %self.receipts[idx],
                            error = %e,
                            "Failed to deliver transition notification"
                        );
                    }
                    // Collapse to the newest status only.
                    let newest = result.status.clone();
                    history.clear();
                    history.push(newest);
                }
            }

            tokio::time::sleep(self.poll_interval).await;
            elapsed += self.poll_interval;
        }

        info!(ticks, notifications, "Watch session expired");

        WatchSummary {
            state: WatchState::Expired,
            ticks,
            notifications,
            started_at,
        }
    }
}
