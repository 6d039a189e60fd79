//! Light and dark presentation themes.
//!
//! Exactly two themes exist. [`ThemeStore`] tracks which one is active and
//! flips between them; nothing here is persisted, so every launch starts
//! light.

use std::fmt;

use ratatui::style::Color;

/// Which of the two themes a [`Theme`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ThemeVariant {
    /// The theme record for this variant.
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeVariant::Light => &LIGHT_THEME,
            ThemeVariant::Dark => &DARK_THEME,
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
        };
        write!(f, "{}", s)
    }
}

/// Color tokens consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Which variant this is.
    pub variant: ThemeVariant,
    /// Dashboard background.
    pub background: Color,
    /// Background of each widget panel.
    pub widget_background: Color,
    /// Foreground text color.
    pub color: Color,
}

/// The light theme.
pub static LIGHT_THEME: Theme = Theme {
    variant: ThemeVariant::Light,
    background: Color::Rgb(0xf9, 0xf9, 0xf9),
    widget_background: Color::Rgb(0xff, 0xff, 0xff),
    color: Color::Rgb(0x00, 0x00, 0x00),
};

/// The dark theme.
pub static DARK_THEME: Theme = Theme {
    variant: ThemeVariant::Dark,
    background: Color::Rgb(0x1c, 0x1c, 0x1e),
    widget_background: Color::Rgb(0x33, 0x33, 0x33),
    color: Color::Rgb(0xff, 0xff, 0xff),
};

/// Tracks the active theme. Starts light.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    active: ThemeVariant,
}

impl ThemeStore {
    /// Creates a store with the light theme active.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active theme.
    pub fn current(&self) -> &'static Theme {
        self.active.theme()
    }

    /// Switches to the other theme and returns it.
    pub fn toggle(&mut self) -> &'static Theme {
        self.active = if self.active == ThemeVariant::Light {
            ThemeVariant::Dark
        } else {
            ThemeVariant::Light
        };
        tracing::debug!("theme switched to {}", self.active);
        self.current()
    }
}
