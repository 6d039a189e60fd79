//! Grid interaction engine.
//!
//! Maps placements onto terminal cells and turns move/resize gestures into
//! layout-change events. The engine never mutates a layout: every gesture that
//! changes something yields a [`GridEvent::LayoutChanged`] carrying a complete
//! replacement layout, and the caller decides what to do with it.
//!
//! The only guarantee the engine gives is bounds clamping (`x + w <= cols`,
//! spans of at least 1x1). Overlapping widgets are left as they are.

use ratatui::layout::Rect;

use crate::layout::{Layout, WidgetPlacement};

/// Number of grid columns.
pub const DEFAULT_COLS: u16 = 6;

/// Terminal rows per grid row.
pub const DEFAULT_ROW_HEIGHT: u16 = 5;

/// Terminal columns spanned by the whole grid.
pub const DEFAULT_WIDTH: u16 = 120;

/// Fixed grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    cols: u16,
    row_height: u16,
    width: u16,
}

impl GridGeometry {
    /// Creates a geometry. Zero values are raised to 1.
    pub fn new(cols: u16, row_height: u16, width: u16) -> Self {
        Self {
            cols: cols.max(1),
            row_height: row_height.max(1),
            width: width.max(1),
        }
    }

    /// Number of columns.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Terminal rows per grid row.
    pub fn row_height(&self) -> u16 {
        self.row_height
    }

    /// Terminal columns spanned by the grid.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Terminal columns per grid column.
    pub fn col_width(&self) -> u16 {
        (self.width / self.cols).max(1)
    }

    /// The part of `available` the grid occupies (never wider than `width`).
    pub fn grid_area(&self, available: Rect) -> Rect {
        Rect {
            width: available.width.min(self.width),
            ..available
        }
    }

    /// Terminal rectangle of `placement` inside `area`, clipped to `area`.
    ///
    /// Returns `None` when the placement lies entirely outside.
    pub fn placement_rect(&self, placement: &WidgetPlacement, area: Rect) -> Option<Rect> {
        let cw = u64::from(self.col_width());
        let rh = u64::from(self.row_height);
        let left = u64::from(area.x) + u64::from(placement.x) * cw;
        let top = u64::from(area.y) + u64::from(placement.y) * rh;
        let right = (u64::from(area.x) + u64::from(placement.right()) * cw).min(u64::from(area.right()));
        let bottom =
            (u64::from(area.y) + u64::from(placement.bottom()) * rh).min(u64::from(area.bottom()));
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }

    /// Grid cell `(col, row)` under a terminal position, if inside `area`.
    pub fn cell_at(&self, area: Rect, column: u16, row: u16) -> Option<(u16, u16)> {
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return None;
        }
        let col = ((column - area.x) / self.col_width()).min(self.cols - 1);
        let grid_row = (row - area.y) / self.row_height;
        Some((col, grid_row))
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROW_HEIGHT, DEFAULT_WIDTH)
    }
}

/// A user gesture on one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Shift by a number of columns/rows.
    Move {
        /// Column delta.
        dx: i32,
        /// Row delta.
        dy: i32,
    },
    /// Grow or shrink the span.
    Resize {
        /// Width delta in columns.
        dw: i32,
        /// Height delta in rows.
        dh: i32,
    },
    /// Place the widget's top-left corner at a cell.
    MoveTo {
        /// Target column.
        x: u16,
        /// Target row.
        y: u16,
    },
}

/// Notification emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    /// The arrangement changed; carries the full new layout.
    LayoutChanged(Layout),
}

/// In-progress mouse drag.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DragState {
    id: String,
    /// Grid offset of the grab point from the widget's top-left cell.
    grab_col: u16,
    grab_row: u16,
}

/// Applies gestures to layouts within a fixed geometry.
#[derive(Debug, Clone, Default)]
pub struct GridEngine {
    geometry: GridGeometry,
    drag: Option<DragState>,
}

impl GridEngine {
    /// Creates an engine for `geometry`.
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            drag: None,
        }
    }

    /// The grid dimensions.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Applies `gesture` to widget `id`.
    ///
    /// Returns `None` if the widget is unknown or the clamped result equals
    /// the current placement.
    pub fn apply(&self, layout: &Layout, id: &str, gesture: Gesture) -> Option<GridEvent> {
        let current = layout.get(id)?;
        let mut next = current.clone();
        match gesture {
            Gesture::Move { dx, dy } => {
                next.x = offset(next.x, dx);
                next.y = offset(next.y, dy);
            }
            Gesture::Resize { dw, dh } => {
                let room = self.geometry.cols.saturating_sub(next.x).max(1);
                next.w = offset(next.w, dw).clamp(1, room);
                next.h = offset(next.h, dh).max(1);
            }
            Gesture::MoveTo { x, y } => {
                next.x = x;
                next.y = y;
            }
        }
        let next = self.clamp(next);
        if &next == current {
            return None;
        }
        Some(GridEvent::LayoutChanged(layout.with_placement(next)))
    }

    /// Forces a placement inside the column bounds.
    pub fn clamp(&self, mut placement: WidgetPlacement) -> WidgetPlacement {
        let cols = self.geometry.cols;
        placement.w = placement.w.clamp(1, cols);
        placement.h = placement.h.max(1);
        placement.x = placement.x.min(cols - placement.w);
        placement
    }

    /// Topmost placement under a terminal position.
    ///
    /// Later placements are drawn on top, so they win.
    pub fn hit_test<'a>(
        &self,
        layout: &'a Layout,
        area: Rect,
        column: u16,
        row: u16,
    ) -> Option<&'a WidgetPlacement> {
        layout.iter().rev().find(|p| {
            self.geometry
                .placement_rect(p, area)
                .is_some_and(|r| column >= r.x && column < r.right() && row >= r.y && row < r.bottom())
        })
    }

    /// Starts dragging the widget under the pointer, returning its id.
    pub fn begin_drag(&mut self, layout: &Layout, area: Rect, column: u16, row: u16) -> Option<String> {
        let placement = self.hit_test(layout, area, column, row)?;
        let (col, grid_row) = self.geometry.cell_at(area, column, row)?;
        let state = DragState {
            id: placement.id.clone(),
            grab_col: col.saturating_sub(placement.x),
            grab_row: grid_row.saturating_sub(placement.y),
        };
        let id = state.id.clone();
        self.drag = Some(state);
        Some(id)
    }

    /// Moves the dragged widget so the grab point follows the pointer.
    pub fn drag_to(&self, layout: &Layout, area: Rect, column: u16, row: u16) -> Option<GridEvent> {
        let drag = self.drag.as_ref()?;
        let (col, grid_row) = self.geometry.cell_at(area, column, row)?;
        let gesture = Gesture::MoveTo {
            x: col.saturating_sub(drag.grab_col),
            y: grid_row.saturating_sub(drag.grab_row),
        };
        self.apply(layout, &drag.id, gesture)
    }

    /// Ends the current drag, returning the dragged widget's id.
    pub fn end_drag(&mut self) -> Option<String> {
        self.drag.take().map(|d| d.id)
    }
}

fn offset(value: u16, delta: i32) -> u16 {
    (i32::from(value) + delta).clamp(0, i32::from(u16::MAX)) as u16
}
