//! Watch session lifecycle integration tests.
//!
//! These exercise the whole engine over the mock seams: batch passes,
//! per-receipt transition history, debounced notification, and budget
//! expiry. Intervals are milliseconds so sessions complete quickly.

use std::sync::Arc;
use std::time::Duration;

use casetrack_core::testing::{MockNotifier, MockStatusSource};
use casetrack_core::{
    BatchProcessor, Notifier, NotifyError, ReceiptNumber, WatchSession, WatchState,
};

const EMAIL: &str = "someone@example.com";

/// Mock seams plus session construction shortcuts.
struct TestHarness {
    source: Arc<MockStatusSource>,
    notifier: Arc<MockNotifier>,
}

impl TestHarness {
    fn new() -> Self {
        Self {
            source: Arc::new(MockStatusSource::new()),
            notifier: Arc::new(MockNotifier::new()),
        }
    }

    /// Build a session over `receipts` that runs exactly `ticks` passes.
    fn session(&self, receipts: &[&str], ticks: u64) -> WatchSession {
        let poll = Duration::from_millis(10);
        let receipts: Vec<ReceiptNumber> = receipts
            .iter()
            .map(|t| t.parse().expect("valid receipt"))
            .collect();
        let processor = BatchProcessor::new(
            Arc::clone(&self.source) as Arc<dyn casetrack_core::StatusSource>,
            Duration::from_millis(1),
        );
        WatchSession::new(
            processor,
            Arc::clone(&self.notifier) as Arc<dyn Notifier>,
            EMAIL,
            receipts,
            poll,
            poll * ticks as u32,
        )
    }
}

#[tokio::test]
async fn session_expires_after_time_budget() {
    let harness = TestHarness::new();
    harness.source.set_status("YSC0000000001", "Case Was Received").await;

    let summary = harness.session(&["YSC0000000001"], 3).run().await;

    assert_eq!(summary.state, WatchState::Expired);
    // Logical elapsed time: exactly budget / interval passes.
    assert_eq!(summary.ticks, 3);
    assert_eq!(harness.source.check_count().await, 3);
}

#[tokio::test]
async fn stable_status_never_notifies() {
    let harness = TestHarness::new();
    harness.source.set_status("YSC0000000001", "Case Was Received").await;

    let summary = harness.session(&["YSC0000000001"], 4).run().await;

    assert_eq!(summary.notifications, 0);
    assert_eq!(harness.notifier.sent_count().await, 0);
}

#[tokio::test]
async fn transition_sends_one_message_with_exact_text() {
    let harness = TestHarness::new();
    harness
        .source
        .set_status_sequence(
            "YSC2090175300",
            vec![
                "Case Was Received".to_string(),
                "Case Was Approved".to_string(),
            ],
        )
        .await;

    let summary = harness.session(&["YSC2090175300"], 3).run().await;

    assert_eq!(summary.notifications, 1);
    let sent = harness.notifier.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].destination, EMAIL);
    assert_eq!(sent[0].subject, "status change");
    assert_eq!(
        sent[0].body,
        "Status of YSC2090175300 changes from Case Was Received to Case Was Approved."
    );
}

#[tokio::test]
async fn notifications_match_strict_status_changes() {
    // Three distinct statuses over four ticks: two strict changes, the
    // first observation never counts.
    let harness = TestHarness::new();
    harness
        .source
        .set_status_sequence(
            "YSC0000000001",
            vec![
                "Case Was Received".to_string(),
                "Case Was Approved".to_string(),
                "Card Was Mailed To Me".to_string(),
            ],
        )
        .await;

    let summary = harness.session(&["YSC0000000001"], 4).run().await;

    assert_eq!(summary.notifications, 2);
    let sent = harness.notifier.sent().await;
    assert_eq!(sent.len(), 2);
    assert!(sent[0].body.contains("from Case Was Received to Case Was Approved"));
    assert!(sent[1].body.contains("from Case Was Approved to Card Was Mailed To Me"));
}

#[tokio::test]
async fn receipts_are_tracked_independently() {
    let harness = TestHarness::new();
    harness
        .source
        .set_status_sequence(
            "YSC0000000001",
            vec![
                "Case Was Received".to_string(),
                "Case Was Approved".to_string(),
            ],
        )
        .await;
    harness.source.set_status("YSC0000000002", "Case Was Received").await;

    let summary = harness
        .session(&["YSC0000000001", "YSC0000000002"], 3)
        .run()
        .await;

    assert_eq!(summary.notifications, 1);
    let sent = harness.notifier.sent().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.starts_with("Status of YSC0000000001 "));
}

#[tokio::test]
async fn failed_delivery_still_collapses_history() {
    let harness = TestHarness::new();
    harness
        .source
        .set_status_sequence(
            "YSC0000000001",
            vec![
                "Case Was Received".to_string(),
                "Case Was Approved".to_string(),
                "Card Was Mailed To Me".to_string(),
            ],
        )
        .await;
    // First delivery attempt fails; the session must carry on and the
    // later transition must still be reported.
    harness
        .notifier
        .set_next_error(NotifyError::Spawn("mail not installed".to_string()))
        .await;

    let summary = harness.session(&["YSC0000000001"], 4).run().await;

    // Both transitions invoked the notifier, only one delivery succeeded.
    assert_eq!(summary.notifications, 2);
    let sent = harness.notifier.sent().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains("from Case Was Approved to Card Was Mailed To Me"));
}

#[tokio::test]
async fn degraded_fetch_is_an_observation_like_any_other() {
    // A transport failure mid-session degrades to the empty status, which
    // is itself a transition away from (and later back to) the real one.
    let harness = TestHarness::new();
    harness.source.set_status("YSC0000000001", "Case Was Received").await;

    let session = harness.session(&["YSC0000000001"], 3);
    harness
        .source
        .set_next_error(casetrack_core::TrackerError::Timeout)
        .await;

    let summary = session.run().await;

    // Tick 1 observes "", tick 2 observes the real status: one transition.
    assert_eq!(summary.notifications, 1);
    let sent = harness.notifier.sent().await;
    assert_eq!(
        sent[0].body,
        "Status of YSC0000000001 changes from  to Case Was Received."
    );
}
