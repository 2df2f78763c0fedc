//! Batch processing and pass-ratio aggregation.
//!
//! A batch is one pass over an ordered list of receipt numbers: check each
//! one in turn, keep the results positionally aligned with the input, and
//! never let a single failed check abort the pass.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::receipt::ReceiptNumber;
use crate::tracker::{CaseStatus, StatusSource};

/// Substring marking a case that is still in its initial "received" state.
/// Everything else, including an empty status from a failed extraction,
/// counts as passed. Known approximation, kept for compatibility with the
/// historical reporting.
pub const RECEIVED_MARKER: &str = "Case Was Received";

/// Errors from batch statistics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    /// Pass ratio is undefined over zero statuses.
    #[error("cannot compute statistics over an empty batch")]
    EmptyBatch,
}

/// Pass/fail counts over one batch of statuses.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    pub total: usize,
    pub passed: usize,
    /// Percentage of passed cases, full precision; format with two
    /// decimals at the console boundary.
    pub ratio: f64,
}

/// Reduce a batch of statuses to pass/fail statistics.
///
/// Pure: no state, identical input gives identical output.
pub fn aggregate<S: AsRef<str>>(statuses: &[S]) -> Result<BatchStatistics, BatchError> {
    if statuses.is_empty() {
        return Err(BatchError::EmptyBatch);
    }
    let total = statuses.len();
    let passed = statuses
        .iter()
        .filter(|s| !s.as_ref().contains(RECEIVED_MARKER))
        .count();
    Ok(BatchStatistics {
        total,
        passed,
        ratio: passed as f64 / total as f64 * 100.0,
    })
}

/// Results of one batch pass, positionally aligned with the input receipts.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub results: Vec<CaseStatus>,
}

impl BatchReport {
    /// The status phrases, in input order.
    pub fn statuses(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.status.as_str()).collect()
    }

    /// Aggregate pass/fail statistics over this report.
    pub fn statistics(&self) -> Result<BatchStatistics, BatchError> {
        aggregate(&self.statuses())
    }
}

/// Drives a [`StatusSource`] over an ordered list of receipt numbers.
pub struct BatchProcessor {
    source: Arc<dyn StatusSource>,
    request_delay: Duration,
}

impl BatchProcessor {
    /// Create a processor that pauses `request_delay` after every check.
    pub fn new(source: Arc<dyn StatusSource>, request_delay: Duration) -> Self {
        Self {
            source,
            request_delay,
        }
    }

    /// Check every receipt in order and return the aligned results.
    ///
    /// A failed check degrades that entry to the empty [`CaseStatus`] and
    /// the pass continues. The inter-request delay is unconditional, even
    /// after the last receipt. With `verbose`, prints `<receipt>: <status>`
    /// per case to stdout.
    pub async fn process(&self, receipts: &[ReceiptNumber], verbose: bool) -> BatchReport {
        let mut results = Vec::with_capacity(receipts.len());

        for receipt in receipts {
            let status = match self.source.check(receipt).await {
                Ok(status) => status,
                Err(e) => {
                    debug!(
                        receipt = %receipt,
                        source = self.source.name(),
                        error = %e,
                        "Status check failed, recording empty result"
                    );
                    CaseStatus::default()
                }
            };

            if verbose {
                println!("{}: {}", receipt, status.status);
            }
            results.push(status);

            tokio::time::sleep(self.request_delay).await;
        }

        BatchReport { results }
    }
}
