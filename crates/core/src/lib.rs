pub mod batch;
pub mod config;
pub mod notify;
pub mod receipt;
pub mod testing;
pub mod tracker;
pub mod watch;

pub use batch::{aggregate, BatchError, BatchProcessor, BatchReport, BatchStatistics};
pub use config::{
    load_config, load_config_from_str, load_email, load_receipts, validate_config, Config,
    ConfigError, FilesConfig, NotifierConfig, TrackerConfig, WatchConfig,
};
pub use notify::{MailNotifier, Notifier, NotifyError};
pub use receipt::{generate_sequence, ReceiptError, ReceiptNumber};
pub use tracker::{extract_status, CaseStatus, StatusSource, TrackerError, UscisClient};
pub use watch::{WatchSession, WatchState, WatchSummary};
