//! Shared startup plumbing for the casetrack binaries.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use casetrack_core::{load_config, Config, ConfigError};

/// Initialize tracing to stderr with `RUST_LOG` override.
///
/// Logs go to stderr so the stdout console contract (per-case lines and
/// summary statistics) stays machine-readable.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolve and load configuration.
///
/// Precedence: an explicit `--config` path (must exist), then
/// `CASETRACK_CONFIG`, then `config.toml` beside the process. Only the
/// explicit path is fatal when missing; the fallbacks degrade to built-in
/// defaults.
pub fn load_config_or_default(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path));
    }

    if let Ok(env_path) = std::env::var("CASETRACK_CONFIG") {
        let path = PathBuf::from(env_path);
        return load_config(&path)
            .with_context(|| format!("Failed to load config from {:?}", path));
    }

    let default_path = Path::new("config.toml");
    match load_config(default_path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => Ok(Config::default()),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to load config from {:?}", default_path))
        }
    }
}
