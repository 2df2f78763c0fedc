//! Mock status source for testing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::receipt::ReceiptNumber;
use crate::tracker::{CaseStatus, StatusSource, TrackerError};

/// A recorded status check for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedCheck {
    /// The receipt number that was checked.
    pub receipt: String,
    /// When the check was made.
    pub timestamp: Instant,
}

/// Per-receipt scripted behavior.
#[derive(Debug, Default)]
struct Script {
    /// Statuses to return in order; the last entry repeats once exhausted.
    statuses: Vec<String>,
    /// How many checks this receipt has seen.
    served: usize,
}

/// Mock implementation of the StatusSource trait.
///
/// Provides controllable behavior for testing:
/// - Script a fixed status or a sequence of statuses per receipt
/// - Track checks for assertions
/// - Inject a one-shot transport error
#[derive(Debug, Default)]
pub struct MockStatusSource {
    /// Scripted statuses per receipt number.
    scripts: Arc<RwLock<HashMap<String, Script>>>,
    /// Recorded checks, in call order.
    checks: Arc<RwLock<Vec<RecordedCheck>>>,
    /// If set, the next check fails with this error.
    next_error: Arc<RwLock<Option<TrackerError>>>,
}

impl MockStatusSource {
    /// Create a new mock source with no scripted statuses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed status for a receipt; every check returns it.
    pub async fn set_status(&self, receipt: &str, status: &str) {
        self.set_status_sequence(receipt, vec![status.to_string()])
            .await;
    }

    /// Script a sequence of statuses for a receipt, one per check.
    /// The last entry repeats once the sequence is exhausted.
    pub async fn set_status_sequence(&self, receipt: &str, statuses: Vec<String>) {
        self.scripts.write().await.insert(
            receipt.to_string(),
            Script {
                statuses,
                served: 0,
            },
        );
    }

    /// Configure the next check to fail with the given error.
    pub async fn set_next_error(&self, error: TrackerError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get recorded checks, in call order.
    pub async fn recorded_checks(&self) -> Vec<RecordedCheck> {
        self.checks.read().await.clone()
    }

    /// Get the number of checks performed.
    pub async fn check_count(&self) -> usize {
        self.checks.read().await.len()
    }

    /// Clear recorded checks.
    pub async fn clear_recorded(&self) {
        self.checks.write().await.clear();
    }
}

#[async_trait]
impl StatusSource for MockStatusSource {
    async fn check(&self, receipt: &ReceiptNumber) -> Result<CaseStatus, TrackerError> {
        self.checks.write().await.push(RecordedCheck {
            receipt: receipt.to_string(),
            timestamp: Instant::now(),
        });

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        let mut scripts = self.scripts.write().await;
        let status = match scripts.get_mut(receipt.as_str()) {
            Some(script) if !script.statuses.is_empty() => {
                let idx = script.served.min(script.statuses.len() - 1);
                script.served += 1;
                script.statuses[idx].clone()
            }
            _ => String::new(),
        };

        Ok(CaseStatus::new(status, ""))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
