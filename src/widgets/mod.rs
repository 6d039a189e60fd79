//! Widget content slots.
//!
//! The layout only knows widget ids and positions. What a widget shows comes
//! from a [`ContentRegistry`] entry with the same id. Placements without a
//! registered slot render as an empty panel, and slots without a placement are
//! simply not drawn.

use std::collections::HashMap;

/// Title and body text shown inside a widget panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetContent {
    /// Id matched against [`WidgetPlacement::id`](crate::layout::WidgetPlacement::id).
    pub id: &'static str,
    /// Panel title.
    pub title: &'static str,
    /// Body text.
    pub body: &'static str,
}

/// Built-in content for the default widgets.
pub const BUILTIN_CONTENT: [WidgetContent; 3] = [
    WidgetContent {
        id: "a",
        title: "Sales",
        body: "Sales data visualization goes here.",
    },
    WidgetContent {
        id: "b",
        title: "Traffic",
        body: "Traffic data visualization goes here.",
    },
    WidgetContent {
        id: "c",
        title: "Performance",
        body: "Performance metrics go here.",
    },
];

/// Maps widget ids to their content.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    slots: HashMap<&'static str, WidgetContent>,
}

impl ContentRegistry {
    /// Creates a registry holding [`BUILTIN_CONTENT`].
    pub fn new() -> Self {
        let mut reg = Self {
            slots: HashMap::new(),
        };
        for content in BUILTIN_CONTENT {
            reg.register(content);
        }
        reg
    }

    /// Adds or replaces the slot for `content.id`.
    pub fn register(&mut self, content: WidgetContent) {
        self.slots.insert(content.id, content);
    }

    /// Content for `id`, if registered.
    pub fn get(&self, id: &str) -> Option<&WidgetContent> {
        self.slots.get(id)
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DEFAULT_WIDGET_IDS;

    #[test]
    fn builtin_slots_cover_default_widgets() {
        let registry = ContentRegistry::new();
        for id in DEFAULT_WIDGET_IDS {
            assert_eq!(registry.get(id).map(|c| c.id), Some(id));
        }
    }

    #[test]
    fn builtin_titles() {
        let registry = ContentRegistry::new();
        let titles: Vec<&str> = DEFAULT_WIDGET_IDS
            .iter()
            .filter_map(|id| registry.get(id))
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Sales", "Traffic", "Performance"]);
    }

    #[test]
    fn unknown_id_has_no_content() {
        assert!(ContentRegistry::new().get("z").is_none());
    }

    #[test]
    fn register_overrides_slot() {
        let mut registry = ContentRegistry::new();
        registry.register(WidgetContent {
            id: "a",
            title: "Revenue",
            body: "",
        });
        assert_eq!(registry.get("a").map(|c| c.title), Some("Revenue"));
        assert_eq!(registry.get("b").map(|c| c.title), Some("Traffic"));
    }
}
