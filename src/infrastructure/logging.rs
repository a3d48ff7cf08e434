//! Logging bootstrap
//!
//! Diagnostics go to stderr through the `log` facade. `RUST_LOG` wins over
//! the configured level when set.

use crate::error::Result;
use crate::infrastructure::config::normalize_log_level;
use flexi_logger::{Logger, LoggerHandle};

/// Start the logger. Keep the returned handle alive for the process lifetime.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let level = normalize_log_level(level)?;

    let handle = Logger::try_with_env_or_str(&level)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;

    log::debug!("logging initialized at level '{}'", level);
    Ok(handle)
}
