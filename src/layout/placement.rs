//! Widget placement records and the layout collection.
//!
//! A [`Layout`] serializes as a bare JSON array, the same shape the grid
//! engine hands out in its change events:
//!
//! ```json
//! [{"i":"a","x":0,"y":0,"w":2,"h":2}]
//! ```
//!
//! Unknown fields are ignored on read, and `id` is accepted in place of `i`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::layout::LayoutError;

/// Widget ids of the built-in arrangement, left to right.
pub const DEFAULT_WIDGET_IDS: [&str; 3] = ["a", "b", "c"];

/// One widget's position and span on the column grid.
///
/// Coordinates are terminal-grid cells and fit in `u16`, the same range as a
/// terminal [`Rect`](ratatui::layout::Rect); larger stored values do not
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetPlacement {
    /// Stable identifier, unique within a layout.
    #[serde(rename = "i", alias = "id")]
    pub id: String,
    /// Column offset.
    pub x: u16,
    /// Row offset.
    pub y: u16,
    /// Width in columns.
    pub w: u16,
    /// Height in rows.
    pub h: u16,
}

impl WidgetPlacement {
    /// Creates a placement.
    pub fn new(id: impl Into<String>, x: u16, y: u16, w: u16, h: u16) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }

    /// First column past the right edge.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// First row past the bottom edge.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }
}

/// Ordered collection of placements, one per widget shown.
///
/// Order is kept as given so persisted output stays stable, but carries no
/// meaning: content is matched to placements by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout(Vec<WidgetPlacement>);

impl Layout {
    /// Creates a layout from placements, keeping their order.
    pub fn new(placements: Vec<WidgetPlacement>) -> Self {
        Self(placements)
    }

    /// The built-in arrangement: three 2x2 widgets side by side on row 0.
    pub fn default_arrangement() -> Self {
        Self(
            DEFAULT_WIDGET_IDS
                .iter()
                .zip(0u16..)
                .map(|(id, i)| WidgetPlacement::new(*id, i * 2, 0, 2, 2))
                .collect(),
        )
    }

    /// Decodes a layout from its persisted JSON form and validates it.
    pub fn from_json(raw: &str) -> Result<Self, LayoutError> {
        let layout: Layout = serde_json::from_str(raw)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Encodes the layout as compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Encodes the layout as indented JSON, for display.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Checks that ids are unique and every span is at least 1x1.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        for p in &self.0 {
            if p.w == 0 || p.h == 0 {
                return Err(LayoutError::EmptySpan {
                    id: p.id.clone(),
                    w: p.w,
                    h: p.h,
                });
            }
            if !seen.insert(p.id.as_str()) {
                return Err(LayoutError::DuplicateId { id: p.id.clone() });
            }
        }
        Ok(())
    }

    /// Placements in stored order.
    pub fn placements(&self) -> &[WidgetPlacement] {
        &self.0
    }

    /// Iterates placements in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, WidgetPlacement> {
        self.0.iter()
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no widget is placed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a placement by widget id.
    pub fn get(&self, id: &str) -> Option<&WidgetPlacement> {
        self.0.iter().find(|p| p.id == id)
    }

    /// Position of the placement with `id` in stored order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|p| p.id == id)
    }

    /// Returns a copy with the placement sharing `updated.id` swapped out.
    ///
    /// The stored order is kept. If no placement has that id, `updated` is
    /// appended.
    pub fn with_placement(&self, updated: WidgetPlacement) -> Self {
        let mut placements = self.0.clone();
        match placements.iter_mut().find(|p| p.id == updated.id) {
            Some(slot) => *slot = updated,
            None => placements.push(updated),
        }
        Self(placements)
    }

    /// Compares two layouts as sets of placements, ignoring order.
    pub fn same_placements(&self, other: &Layout) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        let mut a: Vec<&WidgetPlacement> = self.0.iter().collect();
        let mut b: Vec<&WidgetPlacement> = other.0.iter().collect();
        a.sort_by(|l, r| l.id.cmp(&r.id));
        b.sort_by(|l, r| l.id.cmp(&r.id));
        a == b
    }
}

impl Default for Layout {
    /// Same as [`Layout::default_arrangement`].
    fn default() -> Self {
        Self::default_arrangement()
    }
}

impl From<Vec<WidgetPlacement>> for Layout {
    fn from(placements: Vec<WidgetPlacement>) -> Self {
        Self(placements)
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a WidgetPlacement;
    type IntoIter = std::slice::Iter<'a, WidgetPlacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
