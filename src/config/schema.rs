//! TOML configuration schema types for grid-dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so any subset of the file is valid.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`) parsed by the
//! `humantime` crate.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::xdg;
use crate::grid::{GridGeometry, DEFAULT_COLS, DEFAULT_ROW_HEIGHT, DEFAULT_WIDTH};

/// Render tick used when `tui.tick_rate` does not parse.
const FALLBACK_TICK_RATE: Duration = Duration::from_millis(250);

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [grid]
/// [tui]
/// [storage]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid dimensions.
    pub grid: GridConfig,
    /// TUI behavior.
    pub tui: TuiConfig,
    /// Where the layout is persisted.
    pub storage: StorageConfig,
    /// Logging.
    pub log: LogConfig,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Grid dimensions handed to the grid engine.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns.
    pub cols: u16,
    /// Terminal rows per grid row.
    pub row_height: u16,
    /// Terminal columns spanned by the grid.
    pub width: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            row_height: DEFAULT_ROW_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl GridConfig {
    /// Geometry for the grid engine.
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.cols, self.row_height, self.width)
    }
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// TUI behavior.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
    /// Play the entrance animation when widgets mount.
    pub animation: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
            animation: true,
        }
    }
}

impl TuiConfig {
    /// Parsed tick rate. Falls back to 250ms if the string is invalid or zero.
    pub fn tick_rate(&self) -> Duration {
        match humantime::parse_duration(&self.tick_rate) {
            Ok(d) if !d.is_zero() => d,
            Ok(_) => FALLBACK_TICK_RATE,
            Err(e) => {
                tracing::warn!("invalid tui.tick_rate {:?}: {}", self.tick_rate, e);
                FALLBACK_TICK_RATE
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Layout persistence settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for persisted state. Empty means the platform data dir.
    /// A leading `~` is expanded.
    pub dir: String,
}

impl StorageConfig {
    /// Directory that should back the file storage.
    pub fn resolved_dir(&self) -> PathBuf {
        if self.dir.trim().is_empty() {
            xdg::data_dir()
        } else {
            xdg::expand_tilde(&self.dir)
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity.
    pub level: LogLevel,
    /// Path to log file. Empty means no file.
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

impl LogConfig {
    /// Log file path, if one is configured.
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.file.trim().is_empty() {
            None
        } else {
            Some(xdg::expand_tilde(&self.file))
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
