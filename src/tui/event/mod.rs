//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.
//! Key presses are translated to [`Action`]s here; mouse events carry screen
//! coordinates and are resolved against the rendered grid by the app.

use crate::grid::Gesture;
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEvent,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    ///
    /// Uses `tokio::select!` to race between crossterm input and the tick timer.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Mouse(mouse))) => return Ok(Event::Mouse(mouse)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Switch between the light and dark theme.
    ToggleTheme,
    /// Restore the default widget arrangement.
    ResetLayout,
    /// Focus the next widget.
    FocusNext,
    /// Focus the previous widget.
    FocusPrevious,
    /// Drop widget focus.
    ClearFocus,
    /// Move or resize the focused widget.
    Gesture(Gesture),
}

/// Returns `true` for the global quit keys (`q`, `Ctrl-C`).
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Maps a key event to an action.
///
/// Arrow keys move the focused widget one cell; with `Shift` they resize it.
/// Key releases are ignored.
pub fn handle_key_event(key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }
    if should_quit(key) {
        return Action::Quit;
    }

    let resize = key.modifiers.contains(KeyModifiers::SHIFT);
    let step = |dx: i32, dy: i32| {
        if resize {
            Action::Gesture(Gesture::Resize { dw: dx, dh: dy })
        } else {
            Action::Gesture(Gesture::Move { dx, dy })
        }
    };

    match key.code {
        KeyCode::Char('t') | KeyCode::Char('T') => Action::ToggleTheme,
        KeyCode::Char('r') => Action::ResetLayout,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrevious,
        KeyCode::Esc => Action::ClearFocus,
        KeyCode::Left => step(-1, 0),
        KeyCode::Right => step(1, 0),
        KeyCode::Up => step(0, -1),
        KeyCode::Down => step(0, 1),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests;
