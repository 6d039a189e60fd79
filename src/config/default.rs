//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# grid-dashboard configuration
#
# All values below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/grid-dashboard/config.toml

# ==============================================================================
# Grid
# ==============================================================================

[grid]

# Number of columns widgets snap to.
cols = 6

# Terminal rows per grid row.
row_height = 5

# Terminal columns spanned by the whole grid.
width = 120

# ==============================================================================
# TUI
# ==============================================================================

[tui]

# Render tick rate as a human-readable duration.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# Fade/scale widgets in when they first appear.
animation = true

# ==============================================================================
# Storage
# ==============================================================================

[storage]

# Directory for the saved layout. Empty means the platform data directory
# ($XDG_DATA_HOME/grid-dashboard on Linux). Tilde (~) is expanded.
dir = ""

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Options: "error", "warn", "info", "debug", "trace"
# The GRID_DASHBOARD_LOG environment variable overrides this.
level = "info"

# Path to a log file. Empty means no log file: the dashboard discards logs
# while it owns the terminal, other commands log to stderr.
file = ""
"#;

/// Writes the default config to `path`.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
pub fn create_default_config_at(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup = path.with_extension("toml.backup");
        fs::copy(path, &backup).map_err(|e| ConfigError::WriteError {
            path: backup.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup.display());
    }

    if let Some(parent) = path.parent() {
        xdg::ensure_dir(parent).map_err(|e| ConfigError::WriteError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes the default config to the XDG config path, returning the path.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();
    create_default_config_at(&path, force)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Config;

    #[test]
    fn template_parses_to_defaults() {
        let config: Config =
            toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("template should be valid TOML");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn creates_file_and_parent_dirs() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested/config.toml");
        create_default_config_at(&path, false).expect("should create config");
        let written = fs::read_to_string(&path).expect("config should exist");
        assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[grid]\ncols = 3\n").expect("failed to write config");

        let err = create_default_config_at(&path, false).expect_err("should refuse");
        assert!(matches!(err, ConfigError::AlreadyExists { .. }));
        let untouched = fs::read_to_string(&path).expect("config should exist");
        assert_eq!(untouched, "[grid]\ncols = 3\n");
    }

    #[test]
    fn force_backs_up_existing_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[grid]\ncols = 3\n").expect("failed to write config");

        create_default_config_at(&path, true).expect("should overwrite");

        let backup = fs::read_to_string(dir.path().join("config.toml.backup"))
            .expect("backup should exist");
        assert_eq!(backup, "[grid]\ncols = 3\n");
        let written = fs::read_to_string(&path).expect("config should exist");
        assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);
    }
}
