//! Types for the case status tracker.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::receipt::ReceiptNumber;

/// Status of a single case as observed in one poll.
///
/// Both fields are empty when the page could not be fetched or did not
/// contain the expected structure. That degraded value is ordinary data,
/// not an error: batch processing and watch sessions carry it forward
/// like any other observation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStatus {
    /// Short status phrase, e.g. "Case Was Received".
    pub status: String,
    /// Supplementary detail text from the status page.
    pub info: String,
}

impl CaseStatus {
    pub fn new(status: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            info: info.into(),
        }
    }

    /// True when extraction produced nothing for this case.
    pub fn is_empty(&self) -> bool {
        self.status.is_empty() && self.info.is_empty()
    }
}

/// Errors from the status transport.
///
/// These never escape a batch pass: the processor absorbs them into an
/// empty [`CaseStatus`] and keeps going.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Could not reach the endpoint.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Any other transport failure.
    #[error("request failed: {0}")]
    RequestFailed(String),
}

/// A source of case status observations.
///
/// The seam between the polling engine and the network: the production
/// implementation is [`super::UscisClient`]; tests inject
/// `testing::MockStatusSource`.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Check the current status of one receipt number.
    async fn check(&self, receipt: &ReceiptNumber) -> Result<CaseStatus, TrackerError>;

    /// Human-readable name of this source (for logs).
    fn name(&self) -> &str;
}
