//! Animated starfield backdrop
//!
//! A seeded, deterministic star layout rendered as a full-area widget: a
//! darkened radial gradient sky with twinkling point and cross stars. Star
//! positions are fixed for a given seed; only the twinkle/drift phases move,
//! and both are pure functions of elapsed time supplied by the caller, so the
//! backdrop has no clock of its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use std::f32::consts::PI;

use crate::ui::theme::{blend, Theme};

/// Stars generated when no count is configured
pub const DEFAULT_STAR_COUNT: u16 = 120;

/// Layout seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

/// One twinkle sweep (phase 0 → 2π) takes this long, then reverses
const TWINKLE_PERIOD_MS: u64 = 3_000;

/// Cross-star rotation drift period, also reversing at each end
const DRIFT_PERIOD_MS: u64 = 20_000;

// =============================================================================
// Star Data
// =============================================================================

/// A single star in normalized [0, 1) sky coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// Visual size in [1, 8)
    pub size: f32,
    /// Resting brightness in [0.4, 1.0)
    pub base_alpha: f32,
    /// Per-star twinkle rate multiplier in [0.4, 1.2)
    pub twinkle_speed: f32,
    /// Base rotation for cross stars, degrees in [0, 360)
    pub rotation: f32,
    /// Point stars render as dots, the rest as four-ray crosses
    pub is_point: bool,
}

/// A deterministic star layout
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    seed: u64,
}

impl Starfield {
    /// Generate `count` stars from `seed`; the same inputs always produce
    /// the same layout
    pub fn new(seed: u64, count: u16) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen::<f32>(),
                y: rng.gen::<f32>(),
                size: rng.gen::<f32>() * 7.0 + 1.0,
                base_alpha: rng.gen::<f32>() * 0.6 + 0.4,
                twinkle_speed: rng.gen::<f32>() * 0.8 + 0.4,
                rotation: rng.gen::<f32>() * 360.0,
                is_point: rng.gen::<f32>() > 0.3,
            })
            .collect();
        Self { stars, seed }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, DEFAULT_STAR_COUNT)
    }
}

// =============================================================================
// Animation Phases
// =============================================================================

/// Triangle wave in [0, 1]: ramps up over `period`, then back down
fn ping_pong(elapsed_ms: u64, period_ms: u64) -> f32 {
    let cycle = elapsed_ms % (2 * period_ms);
    if cycle < period_ms {
        cycle as f32 / period_ms as f32
    } else {
        (2 * period_ms - cycle) as f32 / period_ms as f32
    }
}

/// Twinkle phase in [0, 2π], reversing direction every sweep
pub fn twinkle_phase(elapsed_ms: u64) -> f32 {
    ping_pong(elapsed_ms, TWINKLE_PERIOD_MS) * 2.0 * PI
}

/// Slow drift phase in [0, 1] used to rotate cross stars
pub fn drift_phase(elapsed_ms: u64) -> f32 {
    ping_pong(elapsed_ms, DRIFT_PERIOD_MS)
}

/// Brightness of a star at the given twinkle phase, in [0, 1]
pub fn twinkle_alpha(star: &Star, phase: f32) -> f32 {
    let t = phase * star.twinkle_speed;
    let twinkle = (t.sin() * 0.3 + 0.7).clamp(0.2, 1.0);
    (star.base_alpha * twinkle).clamp(0.0, 1.0)
}

/// Size of a star at the given twinkle phase (subtle breathing)
pub fn twinkle_size(star: &Star, phase: f32) -> f32 {
    star.size * (1.0 + (phase * star.twinkle_speed * 1.2).sin() * 0.1)
}

// =============================================================================
// Widget
// =============================================================================

/// Renders a [`Starfield`] over its area at the given animation phases
pub struct StarfieldWidget<'a> {
    field: &'a Starfield,
    twinkle: f32,
    drift: f32,
}

impl<'a> StarfieldWidget<'a> {
    pub fn new(field: &'a Starfield, twinkle: f32, drift: f32) -> Self {
        Self {
            field,
            twinkle,
            drift,
        }
    }
}

/// Sky color at a cell: a faint glow above mid-screen falling off to deep
/// night toward the edges
fn sky_at(x: u16, y: u16, area: Rect) -> Color {
    if area.width == 0 || area.height == 0 {
        return Theme::BACKGROUND;
    }
    let nx = f32::from(x - area.x) / f32::from(area.width) - 0.5;
    let ny = f32::from(y - area.y) / f32::from(area.height) - 0.3;
    let dist = (nx * nx + ny * ny).sqrt();
    blend(Theme::BACKGROUND_GLOW, Theme::BACKGROUND, (dist / 0.7).min(1.0))
}

/// Glyph for a star at its current animated size
fn star_glyph(star: &Star, size: f32, drift: f32) -> char {
    if star.is_point {
        if size < 3.0 {
            '·'
        } else if size < 6.0 {
            '•'
        } else {
            '●'
        }
    } else if size > 5.5 {
        '✦'
    } else {
        // Terminal cells cannot rotate, so drift alternates the ray axes.
        let angle = star.rotation + drift * 10.0;
        if ((angle / 45.0).round() as i64) % 2 == 0 {
            '+'
        } else {
            '×'
        }
    }
}

impl Widget for StarfieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Night-sky gradient base.
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &mut buf[(x, y)];
                cell.set_symbol(" ");
                cell.set_bg(sky_at(x, y, area));
            }
        }

        // Stars on top, alpha expressed by blending toward the sky color.
        for star in self.field.stars() {
            let x = area.x + (star.x * f32::from(area.width - 1)).round() as u16;
            let y = area.y + (star.y * f32::from(area.height - 1)).round() as u16;
            if x >= area.right() || y >= area.bottom() {
                continue;
            }

            let alpha = twinkle_alpha(star, self.twinkle);
            let size = twinkle_size(star, self.twinkle);
            let sky = sky_at(x, y, area);
            let cell = &mut buf[(x, y)];
            cell.set_char(star_glyph(star, size, self.drift));
            cell.set_fg(blend(sky, Theme::STARLIGHT, alpha));
            cell.set_bg(sky);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_layout() {
        let a = Starfield::new(42, 200);
        let b = Starfield::new(42, 200);
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_different_seed_different_layout() {
        let a = Starfield::new(42, 200);
        let b = Starfield::new(43, 200);
        assert_ne!(a.stars(), b.stars());
    }

    #[test]
    fn test_star_value_ranges() {
        let field = Starfield::new(7, 500);
        for star in field.stars() {
            assert!((0.0..1.0).contains(&star.x));
            assert!((0.0..1.0).contains(&star.y));
            assert!((1.0..8.0).contains(&star.size), "size {}", star.size);
            assert!(
                (0.4..1.0).contains(&star.base_alpha),
                "alpha {}",
                star.base_alpha
            );
            assert!(
                (0.4..1.2).contains(&star.twinkle_speed),
                "speed {}",
                star.twinkle_speed
            );
            assert!((0.0..360.0).contains(&star.rotation));
        }
    }

    #[test]
    fn test_point_star_majority() {
        // Roughly 70% of stars are points; assert the split is not degenerate.
        let field = Starfield::new(42, 1000);
        let points = field.stars().iter().filter(|s| s.is_point).count();
        assert!(points > 500, "expected point majority, got {}", points);
        assert!(points < 900, "expected some cross stars, got {}", points);
    }

    #[test]
    fn test_default_field() {
        let field = Starfield::default();
        assert_eq!(field.len(), usize::from(DEFAULT_STAR_COUNT));
        assert_eq!(field.seed(), DEFAULT_SEED);
        assert!(!field.is_empty());
    }

    #[test]
    fn test_ping_pong_reverses() {
        assert_eq!(twinkle_phase(0), 0.0);
        assert!((twinkle_phase(TWINKLE_PERIOD_MS) - 2.0 * PI).abs() < 1e-4);
        assert_eq!(twinkle_phase(2 * TWINKLE_PERIOD_MS), 0.0);

        // Halfway down the return leg.
        let phase = twinkle_phase(TWINKLE_PERIOD_MS + TWINKLE_PERIOD_MS / 2);
        assert!((phase - PI).abs() < 1e-4);
    }

    #[test]
    fn test_drift_phase_bounds() {
        for ms in [0, 5_000, 19_999, 20_000, 33_333, 40_000] {
            let phase = drift_phase(ms);
            assert!((0.0..=1.0).contains(&phase), "phase {} at {}ms", phase, ms);
        }
    }

    #[test]
    fn test_twinkle_alpha_bounds() {
        let field = Starfield::new(11, 100);
        for star in field.stars() {
            for ms in [0, 250, 700, 1_500, 2_900, 4_100] {
                let alpha = twinkle_alpha(star, twinkle_phase(ms));
                assert!((0.0..=1.0).contains(&alpha));
                // Floor: dimmest twinkle still shows 20% of base brightness.
                assert!(alpha >= star.base_alpha * 0.2 - 1e-5);
            }
        }
    }

    #[test]
    fn test_twinkle_size_stays_near_base() {
        let field = Starfield::new(11, 100);
        for star in field.stars() {
            let size = twinkle_size(star, twinkle_phase(1_234));
            assert!(size >= star.size * 0.9 - 1e-5);
            assert!(size <= star.size * 1.1 + 1e-5);
        }
    }
}
