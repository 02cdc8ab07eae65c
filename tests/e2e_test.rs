//! End-to-end flow tests for Remotui
//!
//! Drives the app the way the event loop does: layout sync, key events into
//! the cursor, click dispatch through the region registry, and the resulting
//! playback mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect as TermRect;
use remotui::models::{PlayState, Point, Rect};
use remotui::ui::TransportButton;
use remotui::{App, Config};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn synced_app() -> App {
    let mut app = App::new(&Config::default());
    app.sync_layout(TermRect::new(0, 0, 80, 24));
    app
}

// =============================================================================
// FULL JOURNEY
// =============================================================================

#[test]
fn test_navigate_and_click_play() {
    let mut app = synced_app();
    assert_eq!(app.cursor.region_count(), 5);
    assert_eq!(app.cursor.position(), Point::new(39.5, 11.5));
    assert_eq!(app.player.state, PlayState::Paused);

    // Walk from screen center onto the play/pause button (step 2.0):
    // 8 lefts reach x=23.5, 5 downs reach y=21.5, putting the click point
    // at (24, 22) inside the second transport slot.
    for _ in 0..8 {
        assert!(app.handle_key(press(KeyCode::Left)));
    }
    for _ in 0..5 {
        assert!(app.handle_key(press(KeyCode::Down)));
    }
    assert_eq!(app.hovered_button(), Some(TransportButton::PlayPause));

    assert!(app.handle_key(press(KeyCode::Enter)));
    assert_eq!(app.player.state, PlayState::Playing);
    assert_eq!(app.status.as_deref(), Some("⏵ playing"));

    // Clicking the same spot again pauses.
    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.player.state, PlayState::Paused);
}

#[test]
fn test_click_through_every_button() {
    let mut app = synced_app();
    let layout = app.layout().unwrap().clone();

    for (button, rect) in layout.buttons {
        let center = Rect::from(rect).center();
        app.cursor
            .set_position(Point::new(center.x - 0.5, center.y - 0.5));
        assert_eq!(app.hovered_button(), Some(button), "hover {:?}", button);
        assert!(app.handle_key(press(KeyCode::Enter)), "click {:?}", button);
    }

    // prev, play, next, vol-, vol+: net effect from the demo initial state.
    assert_eq!(app.player.state, PlayState::Playing);
    assert_eq!(app.player.current, 0);
    assert!((app.player.volume - 0.8).abs() < 0.01);
}

#[test]
fn test_background_click_reports_point() {
    let mut app = synced_app();

    // Center of a fresh 80x24 layout is open sky; the click point is the
    // cursor center, one half-cell in from the top-left position.
    app.handle_key(press(KeyCode::Enter));
    assert_eq!(
        app.status.as_deref(),
        Some("nothing under cursor at (40, 12)")
    );
}

// =============================================================================
// RESIZE FLOW
// =============================================================================

#[test]
fn test_resize_recenters_and_rebuilds_regions() {
    let mut app = synced_app();

    // Drift away from center, then resize.
    for _ in 0..6 {
        app.handle_key(press(KeyCode::Right));
    }
    app.sync_layout(TermRect::new(0, 0, 120, 40));

    assert_eq!(app.cursor.position(), Point::new(59.5, 19.5));
    assert_eq!(app.cursor.region_count(), 5);

    // The rebuilt regions dispatch against the new geometry.
    let rect = app
        .layout()
        .unwrap()
        .button_bounds(TransportButton::VolumeUp)
        .unwrap();
    let center = Rect::from(rect).center();
    app.cursor
        .set_position(Point::new(center.x - 0.5, center.y - 0.5));
    app.handle_key(press(KeyCode::Enter));
    assert!((app.player.volume - 0.9).abs() < 0.01);
}

#[test]
fn test_zero_area_terminal_registers_no_buttons() {
    let mut app = App::new(&Config::default());
    app.sync_layout(TermRect::new(0, 0, 0, 0));

    // Every chrome rect is degenerate: nothing clickable, clicks fall back.
    assert_eq!(app.cursor.region_count(), 0);
    app.handle_key(press(KeyCode::Enter));
    assert!(app
        .status
        .as_deref()
        .unwrap()
        .starts_with("nothing under cursor"));
}

// =============================================================================
// KEY ROUTING
// =============================================================================

#[test]
fn test_cursor_consumes_arrows_before_shell() {
    let mut app = synced_app();
    let before = app.player.volume;

    // Arrows belong to the cursor, not any volume/seek shortcut.
    app.handle_key(press(KeyCode::Up));
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.player.volume, before);
    assert_eq!(app.cursor.position(), Point::new(39.5, 11.5));
}

#[test]
fn test_unclaimed_keys_are_not_consumed() {
    let mut app = synced_app();
    assert!(!app.handle_key(press(KeyCode::Char('x'))));
    assert!(!app.handle_key(press(KeyCode::Esc)));
    assert!(app.running);
}

#[test]
fn test_quit_flow() {
    let mut app = synced_app();
    assert!(app.handle_key(press(KeyCode::Char('q'))));
    assert!(!app.running);
}

#[test]
fn test_tick_advances_playback_after_click() {
    let mut app = synced_app();

    // Start playback via the keyboard shortcut, then let time pass.
    app.handle_key(press(KeyCode::Char(' ')));
    assert_eq!(app.player.state, PlayState::Playing);

    app.tick(std::time::Duration::from_secs(10));
    assert_eq!(app.player.elapsed, std::time::Duration::from_secs(10));
}
