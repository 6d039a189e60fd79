//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `GRID_DASHBOARD_LOG` environment variable, falling back to the configured
//! `log.level` when the variable is unset or invalid.
//!
//! The dashboard owns the terminal while it runs, so log lines cannot go to
//! stderr then: they go to `log.file` if configured and are dropped otherwise.
//!
//! ```bash
//! GRID_DASHBOARD_LOG=debug grid-dashboard layout show
//! GRID_DASHBOARD_LOG=grid_dashboard=trace,warn grid-dashboard tui
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::{LogConfig, LogLevel};

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "GRID_DASHBOARD_LOG";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Appended to a file.
    File(PathBuf),
    /// Dropped.
    Discard,
}

impl LogTarget {
    /// Picks the target for `config`.
    ///
    /// A configured file always wins. Otherwise interactive runs discard logs
    /// and other commands use stderr.
    pub fn for_config(config: &LogConfig, interactive: bool) -> Self {
        match config.file_path() {
            Some(path) => LogTarget::File(path),
            None if interactive => LogTarget::Discard,
            None => LogTarget::Stderr,
        }
    }
}

/// Builds the filter from the environment or the configured level.
fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Initialize the tracing subscriber.
///
/// Does nothing if a global subscriber is already set. Returns an error only
/// when the log file cannot be opened.
pub fn init(level: LogLevel, target: LogTarget) -> std::io::Result<()> {
    let builder = fmt().with_env_filter(build_filter(level)).with_target(false);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if let Err(e) = result {
        tracing::debug!("tracing subscriber already set: {}", e);
    }
    Ok(())
}
