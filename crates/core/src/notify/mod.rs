//! Notification dispatch.
//!
//! The watch loop only knows the [`Notifier`] trait; the shipped
//! implementation spawns a `mail(1)`-style command with the message body on
//! stdin. No shell is involved, so message content is never interpolated
//! into a command line.

use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Errors from notification dispatch.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The mail command could not be started.
    #[error("failed to spawn mail command: {0}")]
    Spawn(String),

    /// The mail command ran but exited nonzero.
    #[error("mail command exited with status {0}")]
    CommandFailed(i32),

    /// I/O failure while feeding the message body.
    #[error("i/o error during dispatch: {0}")]
    Io(#[from] std::io::Error),
}

/// Delivers a textual message to a destination.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, destination: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// Notifier that pipes the message body into a mail command:
/// `<command> -s <subject> <destination>`.
pub struct MailNotifier {
    command: String,
}

impl MailNotifier {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl Notifier for MailNotifier {
    async fn send(&self, destination: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        debug!(destination, subject, "Dispatching mail notification");

        let mut child = Command::new(&self.command)
            .arg("-s")
            .arg(subject)
            .arg(destination)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| NotifyError::Spawn(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(body.as_bytes()).await?;
            stdin.write_all(b"\n").await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(NotifyError::CommandFailed(status.code().unwrap_or(-1)));
        }
        Ok(())
    }
}
