//! Error types for durable storage writes.
//!
//! Reads never fail from the caller's point of view (an unreadable entry is
//! treated as absent), so only the write path has an error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when writing a storage entry.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The key cannot be mapped to a single file name.
    #[error("Invalid storage key: {key:?}")]
    InvalidKey {
        /// The rejected key.
        key: String,
    },

    /// The storage directory could not be created.
    #[error("Failed to create storage directory: {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing or syncing the temporary file failed.
    #[error("Failed to write storage entry: {path}")]
    Write {
        /// Temporary file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The final rename failed; the temporary file is left behind.
    #[error("Failed to replace storage entry atomically: {path} - Safety copy at: {temp_path}")]
    WriteAtomic {
        /// Destination entry path.
        path: PathBuf,
        /// Temporary safety copy that still holds the new value.
        temp_path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized before writing.
    #[error("Failed to serialize storage value: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_key_quotes_key() {
        let err = StorageError::InvalidKey {
            key: "../escape".to_string(),
        };
        assert!(err.to_string().contains("\"../escape\""));
    }

    #[test]
    fn display_write_atomic_mentions_safety_copy() {
        let err = StorageError::WriteAtomic {
            path: PathBuf::from("/data/dashboardLayout.json"),
            temp_path: PathBuf::from("/data/dashboardLayout.json.tmp.1"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/dashboardLayout.json"));
        assert!(msg.contains("Safety copy at: /data/dashboardLayout.json.tmp.1"));
    }

    #[test]
    fn create_dir_error_chains_source() {
        let err = StorageError::CreateDir {
            path: PathBuf::from("/readonly"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
