//! Main rendering orchestration for the TUI dashboard.
//!
//! Composes the header (title and theme toggle button), the widget grid, and
//! the footer. Every color comes from the active theme's tokens.

use crate::animation::blend;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Header text displayed at the top of the dashboard.
const HEADER_TEXT: &str = "Dashboard";

/// Label of the theme toggle button.
pub const TOGGLE_BUTTON_LABEL: &str = "[ Toggle Theme ]";

/// Footer text showing available keybindings.
const FOOTER_TEXT: &str =
    "[q] Quit  [t] Theme  [r] Reset  [Tab] Focus  [←↑↓→] Move  [Shift+←↑↓→] Resize  Drag to move";

/// Renders the full dashboard at the current instant.
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    render_dashboard_at(frame, app, Instant::now());
}

/// Renders the full dashboard with entrance transitions evaluated at `now`.
///
/// Updates `app.grid_area` and `app.toggle_button_area` for mouse hit testing.
pub fn render_dashboard_at(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    let theme = app.theme();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.color)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(0),    // grid
            Constraint::Length(1), // footer
        ])
        .split(area);

    app.toggle_button_area = Some(render_header(frame, app, chunks[0]));
    render_grid(frame, app, chunks[1], now);
    render_footer(frame, app, chunks[2]);
}

/// Renders the header and returns the toggle button's area.
fn render_header(frame: &mut Frame, app: &App, area: Rect) -> Rect {
    let theme = app.theme();
    let title = Paragraph::new(Line::from(Span::styled(
        HEADER_TEXT,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);

    let width = (TOGGLE_BUTTON_LABEL.chars().count() as u16).min(area.width);
    let button_area = Rect::new(area.right().saturating_sub(width), area.y, width, area.height);
    // Inverted colors make the button stand out in both themes
    let button = Paragraph::new(TOGGLE_BUTTON_LABEL).style(
        Style::default()
            .fg(theme.background)
            .bg(theme.color)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(button, button_area);
    button_area
}

/// Renders one bordered panel per placement, in layout order.
fn render_grid(frame: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let geometry = *app.geometry();
    let grid_area = geometry.grid_area(area);
    app.grid_area = Some(grid_area);

    let theme = app.theme();
    for placement in app.layout() {
        let Some(mut rect) = geometry.placement_rect(placement, grid_area) else {
            continue;
        };
        let mut opacity = 1.0;
        if let Some(entrance) = app.animator().entrance(&placement.id) {
            rect = entrance.apply_to_rect(rect, now);
            opacity = entrance.opacity(now);
        }

        let bg = blend(theme.background, theme.widget_background, opacity);
        let fg = blend(theme.background, theme.color, opacity);
        let focused = app.focused.as_deref() == Some(placement.id.as_str());

        let content = app.content().get(&placement.id);
        let title = content.map_or(placement.id.as_str(), |c| c.title);
        let block = Block::bordered()
            .border_type(if focused {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(bg).fg(fg));

        let body = Paragraph::new(content.map_or("", |c| c.body))
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(Clear, rect);
        frame.render_widget(body, rect);
    }
}

/// Renders the status message if one is active, otherwise the key hints.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = match &app.status_message {
        Some((message, _)) => Paragraph::new(message.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD)),
        None => Paragraph::new(FOOTER_TEXT).style(Style::default().add_modifier(Modifier::DIM)),
    };
    frame.render_widget(footer, area);
}
