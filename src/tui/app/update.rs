use super::*;
use crate::grid::Gesture;
use crate::tui::event::Action;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

impl App {
    /// Applies an action produced by the key handler.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => self.toggle_theme(),
            Action::ResetLayout => self.reset_layout(),
            Action::FocusNext => self.focus_step(1),
            Action::FocusPrevious => self.focus_step(-1),
            Action::ClearFocus => self.focused = None,
            Action::Gesture(gesture) => self.apply_gesture(gesture),
        }
    }

    /// Moves focus through the widgets in layout order, wrapping around.
    fn focus_step(&mut self, step: isize) {
        let layout = self.layout_store.current();
        if layout.is_empty() {
            self.focused = None;
            return;
        }
        let len = layout.len() as isize;
        let next = match self.focused.as_deref().and_then(|id| layout.position(id)) {
            Some(idx) => (idx as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };
        self.focused = layout
            .placements()
            .get(next as usize)
            .map(|p| p.id.clone());
    }

    /// Applies `gesture` to the focused widget, if any.
    pub fn apply_gesture(&mut self, gesture: Gesture) {
        let Some(id) = self.focused.clone() else {
            return;
        };
        if let Some(event) = self.grid.apply(self.layout_store.current(), &id, gesture) {
            self.on_layout_change(event);
        }
    }

    /// Handles a mouse event using the areas from the last render pass.
    ///
    /// - Click on the toggle button → switch theme
    /// - Click on a widget → focus it and start dragging
    /// - Click elsewhere → clear focus
    /// - Drag → move the grabbed widget cell by cell
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self
                    .toggle_button_area
                    .is_some_and(|area| area.contains(Position::new(column, row)))
                {
                    self.toggle_theme();
                    return;
                }
                let grabbed = self.grid_area.and_then(|area| {
                    self.grid
                        .begin_drag(self.layout_store.current(), area, column, row)
                });
                if let Some(id) = &grabbed {
                    tracing::debug!("grabbed widget {}", id);
                }
                self.focused = grabbed;
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(area) = self.grid_area else {
                    return;
                };
                if let Some(event) =
                    self.grid
                        .drag_to(self.layout_store.current(), area, column, row)
                {
                    self.on_layout_change(event);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(id) = self.grid.end_drag() {
                    tracing::debug!("released widget {}", id);
                }
            }
            _ => {}
        }
    }
}
