//! Mock notifier for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::notify::{Notifier, NotifyError};

/// A message captured by the mock notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub destination: String,
    pub subject: String,
    pub body: String,
}

/// Mock implementation of the Notifier trait.
///
/// Records every delivered message and supports a one-shot injected
/// failure for exercising the watch loop's non-fatal delivery path.
#[derive(Debug, Default)]
pub struct MockNotifier {
    /// Successfully "delivered" messages, in send order.
    sent: Arc<RwLock<Vec<SentMessage>>>,
    /// If set, the next send fails with this error.
    next_error: Arc<RwLock<Option<NotifyError>>>,
}

impl MockNotifier {
    /// Create a new mock notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the next send to fail with the given error.
    pub async fn set_next_error(&self, error: NotifyError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get delivered messages, in send order.
    pub async fn sent(&self) -> Vec<SentMessage> {
        self.sent.read().await.clone()
    }

    /// Get the number of delivered messages.
    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }

    /// Clear delivered messages.
    pub async fn clear_sent(&self) {
        self.sent.write().await.clear();
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, destination: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        self.sent.write().await.push(SentMessage {
            destination: destination.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
