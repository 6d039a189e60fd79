//! Grid dashboard library
//!
//! A terminal dashboard of widget panels on a column grid. The user can
//! rearrange the panels with keyboard and mouse; every change is written
//! through to durable storage so the arrangement survives restarts. A
//! light/dark theme toggle restyles the whole dashboard.
//!
//! The pieces compose bottom-up:
//!
//! - [`storage`]: key-value persistence (`FileStorage`, `MemoryStorage`)
//! - [`layout`]: the layout model and the write-through `LayoutStore`
//! - [`theme`]: the two color themes and the `ThemeStore`
//! - [`grid`]: gesture handling that emits layout-change events
//! - [`tui`]: the ratatui front end that wires everything together

pub mod animation;
pub mod config;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod tui;
pub mod widgets;
