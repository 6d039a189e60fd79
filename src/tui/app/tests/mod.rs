pub(crate) use super::*;
pub(crate) use crate::layout::{WidgetPlacement, LAYOUT_STORAGE_KEY};
pub(crate) use crate::storage::MemoryStorage;


/// Config with entrance transitions disabled, so renders are deterministic.
pub(crate) fn static_config() -> Config {
    let mut config = Config::default();
    config.tui.animation = false;
    config
}

pub(crate) fn make_app() -> App {
    App::new(Box::new(MemoryStorage::new()), &static_config())
}

pub(crate) fn make_app_with_storage(storage: MemoryStorage) -> App {
    App::new(Box::new(storage), &static_config())
}

/// The raw layout entry currently held by the app's storage.
pub(crate) fn stored_layout(app: &App) -> Option<String> {
    app.layout_store.storage().read(LAYOUT_STORAGE_KEY)
}
