//! Durable key-value storage used to persist the dashboard layout.
//!
//! The layout store only needs two operations: read a string value by key and
//! write one back. [`FileStorage`] keeps one file per key on disk and survives
//! restarts; [`MemoryStorage`] keeps entries in process memory and backs tests
//! and `--ephemeral` runs.

mod error;
mod file;

pub use error::StorageError;
pub use file::FileStorage;

use std::collections::HashMap;
use std::fmt::Debug;

/// Key-value persistence external to process memory.
///
/// Implementations acquire whatever resource they need per call and release
/// it before returning; no handle is held between calls.
pub trait Storage: Debug {
    /// Returns the value stored under `key`, or `None` if there is none.
    ///
    /// Implementations treat read failures as absence.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// In-memory storage. Entries are lost when the value is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.read("dashboardLayout"), None);
    }

    #[test]
    fn memory_storage_write_then_read() {
        let mut storage = MemoryStorage::new();
        storage.write("k", "v1").expect("memory write cannot fail");
        assert_eq!(storage.read("k").as_deref(), Some("v1"));
    }

    #[test]
    fn memory_storage_write_overwrites() {
        let mut storage = MemoryStorage::with_entry("k", "old");
        storage.write("k", "new").expect("memory write cannot fail");
        assert_eq!(storage.read("k").as_deref(), Some("new"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn boxed_storage_delegates() {
        let mut boxed: Box<dyn Storage> = Box::new(MemoryStorage::new());
        boxed.write("k", "v").expect("memory write cannot fail");
        assert_eq!(boxed.read("k").as_deref(), Some("v"));
    }
}
