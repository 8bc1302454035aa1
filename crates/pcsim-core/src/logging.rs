//! File logging for the simulator
//!
//! The TUI owns the terminal, so every tracing event goes to a daily rolling
//! file named `pcsim.log.YYYY-MM-DD`.

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "PCSIM_LOG";

/// Prefix of the rolling log files
pub const LOG_FILE_PREFIX: &str = "pcsim.log";

/// Filter used when `PCSIM_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "pcsim=info,pcsim_app=info,pcsim_tui=info,warn";

/// Where logs are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub directory: PathBuf,
}

impl Default for LogConfig {
    /// `<data_local_dir>/pc-assembly-sim/logs`, or `./pc-assembly-sim/logs`
    /// on platforms without one.
    fn default() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            directory: base.join("pc-assembly-sim").join("logs"),
        }
    }
}

impl LogConfig {
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

/// Install the global subscriber.
///
/// Log level is controlled by `PCSIM_LOG`.
///
/// # Examples
/// ```bash
/// PCSIM_LOG=debug pcsim
/// PCSIM_LOG=pcsim_app::board=trace pcsim --log-dir /tmp/pcsim
/// ```
pub fn init(config: &LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.directory)?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.directory, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    log_banner(&config.directory);
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn log_banner(directory: &Path) {
    tracing::info!("──────── PC assembly simulator {} ────────", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", directory.display());
}
