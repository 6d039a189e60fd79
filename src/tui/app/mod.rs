//! Application state and main event loop for the TUI.
//!
//! The [`App`] is the root composition of the dashboard: it owns the layout
//! store, the theme store and the grid engine, and routes every layout-change
//! event from the engine into the store. It also manages terminal
//! setup/teardown, the panic hook, and the render loop.

mod update;

use crate::animation::Animator;
use crate::config::schema::Config;
use crate::grid::{GridEngine, GridEvent, GridGeometry};
use crate::layout::{Layout, LayoutStore};
use crate::storage::Storage;
use crate::theme::{Theme, ThemeStore};
use crate::tui::event::{handle_key_event, Event, EventHandler};
use crate::tui::ui::render_dashboard;
use crate::widgets::ContentRegistry;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

/// How long a status message stays in the footer.
const STATUS_MESSAGE_DURATION: Duration = Duration::from_secs(2);

/// Tick interval while an entrance transition is running.
const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Main application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Owner of the active layout.
    layout_store: LayoutStore<Box<dyn Storage>>,
    /// Active light/dark theme.
    theme_store: ThemeStore,
    /// Turns gestures into layout-change events.
    grid: GridEngine,
    /// Entrance transitions of mounted widgets.
    animator: Animator,
    /// What each widget displays.
    content: ContentRegistry,
    /// Widget receiving keyboard gestures.
    pub focused: Option<String>,
    /// Transient footer message with its expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Grid area from the last render pass, for mouse hit testing.
    pub grid_area: Option<Rect>,
    /// Toggle button area from the last render pass.
    pub toggle_button_area: Option<Rect>,
    /// Passive tick interval.
    tick_rate: Duration,
}

impl App {
    /// Creates the dashboard over `storage`.
    ///
    /// The layout is hydrated exactly once here; every widget in it starts its
    /// entrance transition.
    pub fn new(storage: Box<dyn Storage>, config: &Config) -> Self {
        let layout_store = LayoutStore::initialize(storage);
        let mut animator = Animator::new(config.tui.animation);
        let now = Instant::now();
        for placement in layout_store.current() {
            animator.mount(&placement.id, now);
        }
        tracing::info!(
            "dashboard started with {} widgets",
            layout_store.current().len()
        );

        Self {
            should_quit: false,
            layout_store,
            theme_store: ThemeStore::new(),
            grid: GridEngine::new(config.grid.geometry()),
            animator,
            content: ContentRegistry::new(),
            focused: None,
            status_message: None,
            grid_area: None,
            toggle_button_area: None,
            tick_rate: config.tui.tick_rate(),
        }
    }

    /// The current layout.
    pub fn layout(&self) -> &Layout {
        self.layout_store.current()
    }

    /// The active theme.
    pub fn theme(&self) -> &'static Theme {
        self.theme_store.current()
    }

    /// Grid dimensions.
    pub fn geometry(&self) -> &GridGeometry {
        self.grid.geometry()
    }

    /// Entrance transitions.
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Widget content slots.
    pub fn content(&self) -> &ContentRegistry {
        &self.content
    }

    /// Forwards a grid event to the layout store.
    ///
    /// The new layout is passed on verbatim; widgets new to the session get
    /// their entrance transition.
    pub fn on_layout_change(&mut self, event: GridEvent) {
        match event {
            GridEvent::LayoutChanged(layout) => {
                let now = Instant::now();
                for placement in &layout {
                    self.animator.mount(&placement.id, now);
                }
                self.layout_store.replace(layout);
            }
        }
    }

    /// Switches between the light and dark theme.
    pub fn toggle_theme(&mut self) {
        let theme = self.theme_store.toggle();
        self.set_status(format!("Switched to {} theme", theme.variant));
    }

    /// Restores the default arrangement.
    pub fn reset_layout(&mut self) {
        self.layout_store.reset();
        let now = Instant::now();
        for placement in self.layout_store.current() {
            self.animator.mount(&placement.id, now);
        }
        self.set_status("Layout reset".to_string());
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now() + STATUS_MESSAGE_DURATION));
    }

    /// Clears the status message if its expiry time has passed.
    ///
    /// Returns `true` if a message was removed.
    pub fn expire_status_message(&mut self) -> bool {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let mut reader = EventStream::new();

        terminal.draw(|frame| render_dashboard(frame, self))?;

        loop {
            // Tick faster while panels are still fading in
            let tick = if self.animator.is_animating(Instant::now()) {
                ANIMATION_FRAME_INTERVAL
            } else {
                self.tick_rate
            };
            let event = EventHandler::new(tick).next(&mut reader).await?;

            let should_render = match event {
                Event::Key(key) => {
                    self.dispatch(handle_key_event(key));
                    true // Input events always render immediately
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse);
                    true
                }
                Event::Tick => {
                    let expired = self.expire_status_message();
                    expired || self.animator.is_animating(Instant::now()) || tick != self.tick_rate
                }
                Event::Resize(_, _) => true,
            };

            if self.should_quit {
                return Ok(());
            }

            if should_render {
                terminal.draw(|frame| render_dashboard(frame, self))?;
            }
        }
    }
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

#[cfg(test)]
mod tests;
