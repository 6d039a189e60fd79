//! Entrance animation for widget panels.
//!
//! Each widget fades and scales in once, the first time it is mounted:
//! opacity goes 0 → 1 and scale 0.9 → 1 over half a second. In a terminal,
//! scale shrinks the panel around its center and opacity blends the panel
//! colors from the dashboard background.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::Color;

/// Length of the entrance transition.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(500);

/// Scale at the start of the transition.
pub const INITIAL_SCALE: f32 = 0.9;

/// A single entrance transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    started: Instant,
    duration: Duration,
}

impl Entrance {
    /// Starts a transition at `now`.
    pub fn start(now: Instant) -> Self {
        Self {
            started: now,
            duration: ENTRANCE_DURATION,
        }
    }

    /// A transition that is already complete.
    pub fn finished(now: Instant) -> Self {
        Self {
            started: now,
            duration: Duration::ZERO,
        }
    }

    /// Fraction of the transition elapsed, in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the transition has completed.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Current opacity.
    pub fn opacity(&self, now: Instant) -> f32 {
        self.progress(now)
    }

    /// Current scale factor.
    pub fn scale(&self, now: Instant) -> f32 {
        INITIAL_SCALE + (1.0 - INITIAL_SCALE) * self.progress(now)
    }

    /// Shrinks `area` around its center by the current scale.
    pub fn apply_to_rect(&self, area: Rect, now: Instant) -> Rect {
        let scale = self.scale(now);
        if scale >= 1.0 {
            return area;
        }
        let width = ((f32::from(area.width) * scale).round() as u16).max(1).min(area.width);
        let height = ((f32::from(area.height) * scale).round() as u16).max(1).min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

/// Linear blend between two colors.
///
/// Only RGB colors blend smoothly; other colors switch halfway through.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Tracks the entrance transition of every mounted widget.
#[derive(Debug, Clone)]
pub struct Animator {
    enabled: bool,
    entrances: HashMap<String, Entrance>,
}

impl Animator {
    /// Creates an animator. When disabled, widgets mount fully visible.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entrances: HashMap::new(),
        }
    }

    /// Starts the entrance of `id` unless it was mounted before.
    pub fn mount(&mut self, id: &str, now: Instant) {
        if self.entrances.contains_key(id) {
            return;
        }
        let entrance = if self.enabled {
            Entrance::start(now)
        } else {
            Entrance::finished(now)
        };
        self.entrances.insert(id.to_string(), entrance);
    }

    /// The entrance of `id`, if mounted.
    pub fn entrance(&self, id: &str) -> Option<&Entrance> {
        self.entrances.get(id)
    }

    /// Whether any entrance is still running.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.entrances.values().any(|e| !e.is_finished(now))
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_runs_from_zero_to_one() {
        let t0 = Instant::now();
        let e = Entrance::start(t0);
        assert_eq!(e.progress(t0), 0.0);
        let half = e.progress(t0 + Duration::from_millis(250));
        assert!((half - 0.5).abs() < 1e-3, "got {half}");
        assert_eq!(e.progress(t0 + Duration::from_secs(2)), 1.0);
        assert!(e.is_finished(t0 + ENTRANCE_DURATION));
    }

    #[test]
    fn opacity_and_scale_follow_progress() {
        let t0 = Instant::now();
        let e = Entrance::start(t0);
        assert_eq!(e.opacity(t0), 0.0);
        assert!((e.scale(t0) - INITIAL_SCALE).abs() < 1e-6);
        assert_eq!(e.scale(t0 + ENTRANCE_DURATION), 1.0);
    }

    #[test]
    fn finished_entrance_is_complete_immediately() {
        let t0 = Instant::now();
        let e = Entrance::finished(t0);
        assert!(e.is_finished(t0));
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(e.apply_to_rect(area, t0), area);
    }

    #[test]
    fn apply_to_rect_shrinks_around_center() {
        let t0 = Instant::now();
        let e = Entrance::start(t0);
        let scaled = e.apply_to_rect(Rect::new(10, 10, 40, 10), t0);
        assert_eq!(scaled, Rect::new(12, 10, 36, 9));
    }

    #[test]
    fn apply_to_rect_keeps_tiny_areas_visible() {
        let t0 = Instant::now();
        let e = Entrance::start(t0);
        let scaled = e.apply_to_rect(Rect::new(0, 0, 1, 1), t0);
        assert_eq!(scaled, Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn blend_rgb_endpoints_and_midpoint() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn blend_named_colors_switches_halfway() {
        assert_eq!(blend(Color::Black, Color::White, 0.4), Color::Black);
        assert_eq!(blend(Color::Black, Color::White, 0.6), Color::White);
    }

    #[test]
    fn animator_mounts_once() {
        let t0 = Instant::now();
        let mut animator = Animator::new(true);
        animator.mount("a", t0);
        let later = t0 + Duration::from_millis(300);
        animator.mount("a", later);
        assert_eq!(animator.entrance("a"), Some(&Entrance::start(t0)));
        assert!(animator.is_animating(later));
        assert!(!animator.is_animating(t0 + ENTRANCE_DURATION));
    }

    #[test]
    fn disabled_animator_mounts_finished() {
        let t0 = Instant::now();
        let mut animator = Animator::new(false);
        animator.mount("a", t0);
        assert!(!animator.is_animating(t0));
        assert!(animator.entrance("b").is_none());
    }
}
