//! Write-through layout store.
//!
//! The store is the single owner of the active [`Layout`]. It hydrates once
//! from storage, and every [`replace`](LayoutStore::replace) persists the full
//! new layout before returning. Storage failures never reach the caller: the
//! in-memory layout stays authoritative for the running session.
//!
//! A replacement that [`hydrate`] would reject on the next start (duplicate
//! ids, empty spans) is refused, so what is stored always reloads.

use crate::layout::Layout;
use crate::storage::{Storage, StorageError};

/// Storage key of the persisted layout entry.
pub const LAYOUT_STORAGE_KEY: &str = "dashboardLayout";

/// Reads the persisted layout from `storage`.
///
/// Falls back to [`Layout::default_arrangement`] when the entry is absent or
/// does not decode as a valid layout.
pub fn hydrate<S: Storage + ?Sized>(storage: &S) -> Layout {
    match storage.read(LAYOUT_STORAGE_KEY) {
        None => {
            tracing::debug!("no saved layout, using default arrangement");
            Layout::default_arrangement()
        }
        Some(raw) => match Layout::from_json(&raw) {
            Ok(layout) => {
                tracing::debug!("restored layout with {} widgets", layout.len());
                layout
            }
            Err(e) => {
                tracing::warn!("ignoring saved layout: {}", e);
                Layout::default_arrangement()
            }
        },
    }
}

/// Serializes `layout` and writes it under [`LAYOUT_STORAGE_KEY`].
pub fn persist<S: Storage + ?Sized>(storage: &mut S, layout: &Layout) -> Result<(), StorageError> {
    let json = layout.to_json()?;
    storage.write(LAYOUT_STORAGE_KEY, &json)
}

/// Owns the active layout and mirrors it to storage.
#[derive(Debug)]
pub struct LayoutStore<S> {
    storage: S,
    layout: Layout,
}

impl<S: Storage> LayoutStore<S> {
    /// Hydrates the store from `storage`.
    pub fn initialize(storage: S) -> Self {
        let layout = hydrate(&storage);
        Self { storage, layout }
    }

    /// The latest layout.
    pub fn current(&self) -> &Layout {
        &self.layout
    }

    /// Replaces the whole layout and persists it.
    ///
    /// An invalid layout is logged and dropped; the previous one stays
    /// current and stored. A failed write is logged and otherwise ignored.
    pub fn replace(&mut self, new_layout: Layout) {
        if let Err(e) = new_layout.validate() {
            tracing::warn!("rejecting layout change: {}", e);
            return;
        }
        tracing::debug!("replacing layout ({} widgets)", new_layout.len());
        self.layout = new_layout;
        if let Err(e) = persist(&mut self.storage, &self.layout) {
            tracing::warn!("failed to persist layout: {}", e);
        }
    }

    /// Restores the built-in arrangement and persists it.
    pub fn reset(&mut self) {
        self.replace(Layout::default_arrangement());
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
