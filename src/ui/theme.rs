//! Night-sky theme for Remotui
//!
//! Color palette and style helpers for the shell chrome. The palette is built
//! around a near-black night backdrop so the starfield reads as sky and the
//! chrome floats above it.

use ratatui::style::{Color, Modifier, Style};

/// Night-sky color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #050510 (deep night)
    pub const BACKGROUND: Color = Color::Rgb(0x05, 0x05, 0x10);

    /// Primary: #7f9cf5 (comet blue)
    pub const PRIMARY: Color = Color::Rgb(0x7f, 0x9c, 0xf5);

    /// Secondary: #c084fc (nebula violet)
    pub const SECONDARY: Color = Color::Rgb(0xc0, 0x84, 0xfc);

    /// Accent: #ffd27f (star gold)
    pub const ACCENT: Color = Color::Rgb(0xff, 0xd2, 0x7f);

    /// Highlight: #ff6ac1 (supernova pink)
    pub const HIGHLIGHT: Color = Color::Rgb(0xff, 0x6a, 0xc1);

    /// Text: #e6e8fa (starlight white)
    pub const TEXT: Color = Color::Rgb(0xe6, 0xe8, 0xfa);

    /// Dim: #3c3c50 (muted slate)
    pub const DIM: Color = Color::Rgb(0x3c, 0x3c, 0x50);

    /// Success: #34d399 (green)
    pub const SUCCESS: Color = Color::Rgb(0x34, 0xd3, 0x99);

    /// Warning: #fbbf24 (amber)
    pub const WARNING: Color = Color::Rgb(0xfb, 0xbf, 0x24);

    /// Error: #f87171 (red)
    pub const ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Faint glow near the gradient center of the backdrop
    pub const BACKGROUND_GLOW: Color = Color::Rgb(0x0e, 0x0e, 0x22);

    /// Panel surfaces (transport buttons)
    pub const BACKGROUND_PANEL: Color = Color::Rgb(0x10, 0x10, 0x1f);

    /// Border color (dim indigo)
    pub const BORDER: Color = Color::Rgb(0x2e, 0x33, 0x50);

    /// Border color for the panel under the cursor
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    /// Star glyph color before alpha blending
    pub const STARLIGHT: Color = Color::Rgb(0xe6, 0xe8, 0xfa);

    /// Cursor glyph color
    pub const CURSOR: Color = Color::Rgb(0xff, 0xff, 0xff);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary text style (violet)
    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Accent text style (gold)
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Success style
    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Warning style
    pub fn warning() -> Style {
        Style::default()
            .fg(Self::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal panel border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Border of the panel currently under the cursor
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor glyph over empty space
    pub fn cursor_glyph() -> Style {
        Style::default()
            .fg(Self::CURSOR)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor glyph while hovering a clickable target
    ///
    /// Hovered targets already glow accent, so the glyph inverts to stay
    /// visible on top of them.
    pub fn cursor_over_target() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Transport button label
    pub fn transport_button() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_PANEL)
    }

    /// Transport button under the cursor
    pub fn transport_button_hover() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Current track title
    pub fn track_title() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    /// Track artist line
    pub fn track_artist() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Elapsed-time progress bar
    pub fn progress_bar() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .bg(Self::BACKGROUND_PANEL)
    }

    /// Status bar text
    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_PANEL)
    }

    /// Keybinding hint
    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Keybinding description
    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::DIM)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Calculate contrast ratio between two colors
/// Returns a value between 1 (same color) and 21 (black/white)
/// WCAG AA requires >= 4.5:1 for normal text, >= 3:1 for large text
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Check if a foreground/background pair meets WCAG AA for normal text
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Check if a foreground/background pair meets WCAG AA for large text
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

/// Linear blend from `from` toward `to` by `t` in [0, 1]
///
/// Non-RGB inputs come back unchanged. The starfield uses this to express
/// star alpha on terminals that have no real transparency.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let (Some((fr, fg, fb)), Some((tr, tg, tb))) = (color_to_rgb(from), color_to_rgb(to)) else {
        return from;
    };
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 {
        (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
    };
    Color::Rgb(mix(fr, tr), mix(fg, tg), mix(fb, tb))
}
