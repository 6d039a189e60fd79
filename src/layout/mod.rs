//! Layout state for the dashboard.
//!
//! A [`Layout`] lists where each widget sits on the column grid. The
//! [`LayoutStore`] owns the active layout, hydrates it from storage at startup
//! and persists every replacement.

mod error;
mod placement;
mod store;

pub use error::LayoutError;
pub use placement::{Layout, WidgetPlacement, DEFAULT_WIDGET_IDS};
pub use store::{hydrate, persist, LayoutStore, LAYOUT_STORAGE_KEY};
