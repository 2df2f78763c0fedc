mod files;
mod loader;
mod types;
mod validate;

pub use files::{load_email, load_receipts};
pub use loader::{load_config, load_config_from_str};
pub use types::*;
pub use validate::validate_config;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read {0}: {1}")]
    ReadError(String, String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("Invalid receipt number in receipts file: {0}")]
    InvalidReceipt(String),

    #[error("Receipts file contains no receipt numbers: {0}")]
    EmptyReceipts(String),
}
