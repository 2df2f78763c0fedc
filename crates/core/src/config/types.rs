use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::tracker::{DEFAULT_CASE_STATUS_URL, DEFAULT_USER_AGENT};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

/// Status tracker configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// Case-status endpoint URL
    #[serde(default = "default_url")]
    pub url: String,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Pause after every request in milliseconds (default: 200)
    #[serde(default = "default_request_delay")]
    pub request_delay_ms: u64,
}

impl TrackerConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
            request_delay_ms: default_request_delay(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_CASE_STATUS_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_request_delay() -> u64 {
    200
}

/// Watch session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchConfig {
    /// Pause between batch passes in milliseconds (default: 10 minutes)
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// Total session budget in seconds (default: 12 hours)
    #[serde(default = "default_time_budget")]
    pub time_budget_secs: u64,
}

impl WatchConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn time_budget(&self) -> Duration {
        Duration::from_secs(self.time_budget_secs)
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            time_budget_secs: default_time_budget(),
        }
    }
}

fn default_poll_interval() -> u64 {
    600_000
}

fn default_time_budget() -> u64 {
    12 * 3600
}

/// Notifier configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifierConfig {
    /// Mail command to spawn for notifications (default: "mail")
    #[serde(default = "default_mail_command")]
    pub mail_command: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            mail_command: default_mail_command(),
        }
    }
}

fn default_mail_command() -> String {
    "mail".to_string()
}

/// Watch-mode input file locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilesConfig {
    /// File holding the notification email address
    #[serde(default = "default_email_file")]
    pub email: PathBuf,
    /// File holding receipt numbers, one per line
    #[serde(default = "default_receipts_file")]
    pub receipts: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            email: default_email_file(),
            receipts: default_receipts_file(),
        }
    }
}

fn default_email_file() -> PathBuf {
    PathBuf::from("email.data")
}

fn default_receipts_file() -> PathBuf {
    PathBuf::from("receipts.data")
}
