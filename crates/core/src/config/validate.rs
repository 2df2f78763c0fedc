use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Tracker URL is non-empty and the timeout is nonzero
/// - Watch poll interval is nonzero (a zero interval would never expire)
/// - Notifier mail command is non-empty
/// - Input file paths are non-empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.tracker.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "tracker.url cannot be empty".to_string(),
        ));
    }
    if config.tracker.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "tracker.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.watch.poll_interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "watch.poll_interval_ms cannot be 0".to_string(),
        ));
    }

    if config.notifier.mail_command.is_empty() {
        return Err(ConfigError::ValidationError(
            "notifier.mail_command cannot be empty".to_string(),
        ));
    }

    if config.files.email.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "files.email cannot be empty".to_string(),
        ));
    }
    if config.files.receipts.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "files.receipts cannot be empty".to_string(),
        ));
    }

    Ok(())
}
