//! Testing utilities and mock implementations.
//!
//! Mocks for the two external seams — the status source and the notifier —
//! plus HTML fixtures for extractor tests, so the whole engine can be
//! exercised without network or a mail command.
//!
//! # Example
//!
//! ```rust,ignore
//! use casetrack_core::testing::{MockNotifier, MockStatusSource};
//!
//! let source = MockStatusSource::new();
//! source.set_status_sequence(
//!     "YSC2090175300",
//!     vec!["Case Was Received".into(), "Case Was Approved".into()],
//! ).await;
//!
//! let notifier = MockNotifier::new();
//! // ... run a WatchSession, then assert on notifier.sent().await
//! ```

mod mock_notifier;
mod mock_source;

pub use mock_notifier::{MockNotifier, SentMessage};
pub use mock_source::{MockStatusSource, RecordedCheck};

/// Test fixtures and helper functions.
pub mod fixtures {
    /// Build a case-status page with the two structural regions the
    /// extractor locates: the current-status section (phrase between a
    /// colon and a plus sign) and the detail section.
    pub fn status_page(status: &str, info: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<body>
  <div class="container">
    <div class="current-status-sec">
      <span>Your Current Status:</span>
      <h2>{status}</h2>
      <span class="toggle">+</span>
    </div>
    <div class="rows text-center">
      <p>{info}</p>
    </div>
  </div>
</body>
</html>"#
        )
    }

    /// A structurally valid page with no status regions at all, as served
    /// for unknown receipts or after layout drift.
    pub fn empty_page() -> String {
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="container">
    <h1>My Case Status Does Not Recognize The Receipt Number Entered</h1>
  </div>
</body>
</html>"#
            .to_string()
    }
}
