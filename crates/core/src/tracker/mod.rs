//! Case status retrieval.
//!
//! This module provides a `StatusSource` trait for checking the current
//! status of a receipt number, plus the USCIS web implementation: an HTTP
//! client that posts the case-status form and a best-effort HTML extractor
//! for the response page.

mod extract;
mod types;
mod uscis;

pub use extract::extract_status;
pub use types::{CaseStatus, StatusSource, TrackerError};
pub use uscis::{UscisClient, DEFAULT_CASE_STATUS_URL, DEFAULT_USER_AGENT};
