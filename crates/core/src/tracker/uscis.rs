//! USCIS case-status web client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::TrackerConfig;
use crate::receipt::ReceiptNumber;

use super::extract::extract_status;
use super::types::{CaseStatus, StatusSource, TrackerError};

/// The case-status endpoint.
pub const DEFAULT_CASE_STATUS_URL: &str = "https://egov.uscis.gov/casestatus/mycasestatus.do";

/// Browser-identifying User-Agent the endpoint expects.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/74.0.3729.169 Safari/537.36";

/// HTTP client for the USCIS case-status page.
///
/// One POST per check, no retries, no caching beyond reqwest's connection
/// pool. Transport failures surface as [`TrackerError`] and are absorbed
/// by the batch processor.
pub struct UscisClient {
    client: Client,
    config: TrackerConfig,
}

impl UscisClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TrackerConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch the raw status page for one receipt number.
    pub async fn fetch_status_page(&self, receipt: &ReceiptNumber) -> Result<String, TrackerError> {
        let form = [
            ("changeLocale", ""),
            ("appReceiptNum", receipt.as_str()),
            ("initCaseSearch", "CHECK STATUS"),
        ];

        debug!(receipt = %receipt, url = %self.config.url, "Fetching status page");

        let response = self
            .client
            .post(&self.config.url)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .form(&form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        response.text().await.map_err(map_reqwest_error)
    }
}

#[async_trait]
impl StatusSource for UscisClient {
    async fn check(&self, receipt: &ReceiptNumber) -> Result<CaseStatus, TrackerError> {
        let body = self.fetch_status_page(receipt).await?;
        Ok(extract_status(&body))
    }

    fn name(&self) -> &str {
        "uscis"
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TrackerError {
    if e.is_timeout() {
        TrackerError::Timeout
    } else if e.is_connect() {
        TrackerError::ConnectionFailed(e.to_string())
    } else {
        TrackerError::RequestFailed(e.to_string())
    }
}
