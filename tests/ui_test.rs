//! UI component tests for Remotui
//!
//! Covers theme contrast, shell layout across terminal sizes, and frame
//! composition (starfield, chrome, cursor overlay) via TestBackend.
//!
//! ## Test Cases
//! - theme: all palette colors valid RGB, WCAG contrast compliance
//! - layout: five transport buttons, responsive at 80x24 and 200x50
//! - render: chrome draws over the sky, cursor glyph lands on its cell

use ratatui::{backend::TestBackend, layout::Rect as TermRect, Terminal};
use remotui::models::{Point, Rect};
use remotui::ui::theme::{color_to_rgb, contrast_ratio, meets_wcag_aa, meets_wcag_aa_large};
use remotui::ui::{overlay, shell, starfield, ShellLayout, StarfieldWidget, Theme, TransportButton};
use remotui::{App, Config};

// =============================================================================
// THEME COLOR TESTS
// =============================================================================

#[test]
fn test_theme_colors_valid_rgb() {
    let colors = [
        ("BACKGROUND", Theme::BACKGROUND),
        ("PRIMARY", Theme::PRIMARY),
        ("SECONDARY", Theme::SECONDARY),
        ("ACCENT", Theme::ACCENT),
        ("HIGHLIGHT", Theme::HIGHLIGHT),
        ("TEXT", Theme::TEXT),
        ("DIM", Theme::DIM),
        ("SUCCESS", Theme::SUCCESS),
        ("WARNING", Theme::WARNING),
        ("ERROR", Theme::ERROR),
        ("BACKGROUND_GLOW", Theme::BACKGROUND_GLOW),
        ("BACKGROUND_PANEL", Theme::BACKGROUND_PANEL),
        ("BORDER", Theme::BORDER),
        ("STARLIGHT", Theme::STARLIGHT),
        ("CURSOR", Theme::CURSOR),
    ];

    for (name, color) in colors {
        assert!(color_to_rgb(color).is_some(), "{} should be RGB", name);
    }
}

#[test]
fn test_text_meets_wcag_aa() {
    let bg = color_to_rgb(Theme::BACKGROUND).unwrap();
    let text = color_to_rgb(Theme::TEXT).unwrap();
    assert!(
        meets_wcag_aa(text, bg),
        "TEXT on BACKGROUND contrast {:.2}:1 must be >= 4.5:1",
        contrast_ratio(text, bg)
    );
}

#[test]
fn test_accents_meet_wcag_aa_large() {
    let bg = color_to_rgb(Theme::BACKGROUND).unwrap();
    for (name, color) in [
        ("PRIMARY", Theme::PRIMARY),
        ("SECONDARY", Theme::SECONDARY),
        ("ACCENT", Theme::ACCENT),
        ("HIGHLIGHT", Theme::HIGHLIGHT),
        ("SUCCESS", Theme::SUCCESS),
        ("WARNING", Theme::WARNING),
        ("ERROR", Theme::ERROR),
        ("CURSOR", Theme::CURSOR),
    ] {
        let fg = color_to_rgb(color).unwrap();
        assert!(
            meets_wcag_aa_large(fg, bg),
            "{} contrast {:.2}:1 must be >= 3:1",
            name,
            contrast_ratio(fg, bg)
        );
    }
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

#[test]
fn test_layout_responsive() {
    for (w, h) in [(80u16, 24u16), (200, 50), (40, 12)] {
        let layout = ShellLayout::compute(TermRect::new(0, 0, w, h));
        assert_eq!(layout.size, (w, h));
        assert_eq!(layout.buttons.len(), 5, "at {}x{}", w, h);
        assert_eq!(layout.status.height, 1);
    }
}

#[test]
fn test_layout_80x24_geometry() {
    let layout = ShellLayout::compute(TermRect::new(0, 0, 80, 24));

    assert_eq!(layout.transport, TermRect::new(0, 20, 80, 3));
    assert_eq!(layout.status, TermRect::new(0, 23, 80, 1));
    assert_eq!(layout.now_playing, TermRect::new(10, 5, 60, 9));

    // Five equal button slots across the transport row.
    let widths: Vec<u16> = layout.buttons.iter().map(|(_, r)| r.width).collect();
    assert_eq!(widths, vec![16, 16, 16, 16, 16]);
}

#[test]
fn test_layout_tiny_terminal_degrades_gracefully() {
    // Not enough rows for the transport row: rects collapse instead of
    // panicking, and the app later skips registering the empty ones.
    let layout = ShellLayout::compute(TermRect::new(0, 0, 10, 5));
    assert_eq!(layout.buttons.len(), 5);
    for (_, rect) in &layout.buttons {
        assert!(Rect::from(*rect).is_empty() || rect.bottom() <= 5);
    }
}

// =============================================================================
// FRAME COMPOSITION TESTS
// =============================================================================

/// Render a full frame the way the binary composes it
fn draw_frame(app: &mut App, width: u16, height: u16) -> ratatui::buffer::Buffer {
    app.sync_layout(TermRect::new(0, 0, width, height));
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            if app.starfield_enabled {
                let widget = StarfieldWidget::new(
                    &app.starfield,
                    starfield::twinkle_phase(0),
                    starfield::drift_phase(0),
                );
                frame.render_widget(widget, frame.area());
            }
            let layout = app.layout().unwrap().clone();
            shell::render(
                frame,
                &layout,
                &app.player,
                app.status.as_deref(),
                app.cursor.step_size(),
                app.hovered_button(),
            );
            overlay::render(frame, &app.cursor);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

#[test]
fn test_cursor_glyph_rendered_at_position() {
    let mut app = App::new(&Config::default());
    let buffer = draw_frame(&mut app, 80, 24);

    // 1x1 cursor centered on 80x24 sits at (39.5, 11.5), drawn at cell (40, 12).
    assert_eq!(app.cursor.position(), Point::new(39.5, 11.5));
    assert_eq!(buffer[(40u16, 12u16)].symbol(), overlay::CURSOR_GLYPH.to_string());
}

#[test]
fn test_cursor_glyph_takes_accent_over_target() {
    let mut app = App::new(&Config::default());
    app.sync_layout(TermRect::new(0, 0, 80, 24));

    // Park the click point on the play/pause button.
    let rect = app
        .layout()
        .unwrap()
        .button_bounds(TransportButton::PlayPause)
        .unwrap();
    let center = Rect::from(rect).center();
    app.cursor
        .set_position(Point::new(center.x - 0.5, center.y - 0.5));

    let buffer = draw_frame(&mut app, 80, 24);
    let cell = &buffer[(center.x as u16, center.y.floor() as u16)];
    assert_eq!(cell.symbol(), overlay::CURSOR_GLYPH.to_string());
    // Inverted over-target style: dark glyph on the accent background.
    assert_eq!(cell.fg, Theme::BACKGROUND);
    assert_eq!(cell.bg, Theme::ACCENT);
}

#[test]
fn test_hovered_button_border_focuses() {
    let mut app = App::new(&Config::default());
    app.sync_layout(TermRect::new(0, 0, 80, 24));

    let rect = app
        .layout()
        .unwrap()
        .button_bounds(TransportButton::Next)
        .unwrap();
    let center = Rect::from(rect).center();
    app.cursor
        .set_position(Point::new(center.x - 0.5, center.y - 0.5));

    let buffer = draw_frame(&mut app, 80, 24);
    // Top-left border corner of the hovered button glows primary.
    assert_eq!(buffer[(rect.x, rect.y)].fg, Theme::PRIMARY);
}

#[test]
fn test_chrome_renders_track_info() {
    let mut app = App::new(&Config::default());
    let buffer = draw_frame(&mut app, 80, 24);

    let rendered: String = buffer.content.iter().map(|c| c.symbol()).collect();
    let title = app.player.current_track().unwrap().title.clone();
    assert!(rendered.contains(&title), "track title missing from frame");
    assert!(rendered.contains("NOW PLAYING"));
}

#[test]
fn test_starfield_can_be_disabled() {
    let config = Config {
        starfield: false,
        ..Config::default()
    };
    let mut app = App::new(&config);
    let buffer = draw_frame(&mut app, 80, 24);

    // Without the backdrop, cells outside the chrome stay untouched.
    assert_eq!(buffer[(0u16, 0u16)].symbol(), " ");
    assert_eq!(buffer[(0u16, 0u16)].bg, ratatui::style::Color::Reset);
}

#[test]
fn test_render_at_minimal_size() {
    let mut app = App::new(&Config::default());
    // Should not panic even when there is no room for the chrome.
    let _ = draw_frame(&mut app, 5, 3);
}
