//! File-backed storage: one JSON file per key.
//!
//! Writes go through a temp file that is fsynced and then renamed over the
//! entry, so a crash mid-write never leaves a truncated entry behind. Each key
//! has a single temp path (`<key>.json.tmp`): a failed write removes it, and a
//! failed rename keeps it as the one safety copy until the next write.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::xdg;
use crate::storage::{Storage, StorageError};

/// Storage rooted at a directory, one `<key>.json` file per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Temp file a write of `key` goes through.
    pub fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json.tmp"))
    }

    fn check_key(key: &str) -> Result<(), StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(['/', '\\'])
            && !key.contains('\0');
        if valid {
            Ok(())
        } else {
            Err(StorageError::InvalidKey {
                key: key.to_string(),
            })
        }
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        if Self::check_key(key).is_err() {
            return None;
        }
        let path = self.entry_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("failed to read storage entry {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::check_key(key)?;

        xdg::ensure_dir(&self.dir).map_err(|source| StorageError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.entry_path(key);
        let temp_path = self.temp_path(key);

        if let Err(source) = write_synced(&temp_path, value) {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::Write {
                path: temp_path,
                source,
            });
        }

        fs::rename(&temp_path, &path).map_err(|source| StorageError::WriteAtomic {
            path: path.clone(),
            temp_path: temp_path.clone(),
            source,
        })?;

        tracing::debug!("wrote storage entry {}", path.display());
        Ok(())
    }
}

/// Writes `value` to `path` and flushes it to disk.
fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    fs::write(path, value)?;
    fs::File::open(path)?.sync_all()
}
