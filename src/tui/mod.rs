//! TUI module for the grid dashboard.
//!
//! Provides a terminal user interface built on ratatui and crossterm that
//! draws the widget grid and lets the user rearrange it with keyboard and
//! mouse.

pub mod app;
pub mod event;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
