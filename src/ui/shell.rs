//! Media shell chrome
//!
//! The now-playing panel, transport row, and status line drawn over the
//! starfield. Layout is a pure function of the terminal area so the app can
//! compute it once per size change, register the transport buttons as
//! clickable regions, and render from the same rects every frame.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::models::{PlayState, PlayerState};
use crate::ui::Theme;

// =============================================================================
// Transport Buttons
// =============================================================================

/// The five cursor-clickable transport controls, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportButton {
    Previous,
    PlayPause,
    Next,
    VolumeDown,
    VolumeUp,
}

impl TransportButton {
    pub const ALL: [TransportButton; 5] = [
        TransportButton::Previous,
        TransportButton::PlayPause,
        TransportButton::Next,
        TransportButton::VolumeDown,
        TransportButton::VolumeUp,
    ];

    /// Button label; play/pause reflects the current transport state
    pub fn label(self, state: PlayState) -> &'static str {
        match self {
            TransportButton::Previous => "⏮ prev",
            TransportButton::PlayPause => match state {
                PlayState::Playing => "⏸ pause",
                PlayState::Paused | PlayState::Stopped => "⏵ play",
            },
            TransportButton::Next => "next ⏭",
            TransportButton::VolumeDown => "vol −",
            TransportButton::VolumeUp => "vol +",
        }
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Chrome rects computed for one terminal size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLayout {
    /// Terminal size this layout was computed for
    pub size: (u16, u16),
    /// Centered now-playing panel
    pub now_playing: Rect,
    /// Transport row containing the buttons
    pub transport: Rect,
    /// Status line at the bottom
    pub status: Rect,
    /// One rect per transport button, in [`TransportButton::ALL`] order
    pub buttons: Vec<(TransportButton, Rect)>,
}

impl ShellLayout {
    /// Compute the chrome layout for a terminal area
    pub fn compute(area: Rect) -> Self {
        let [main, transport, status] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let now_playing = centered(main, 60, 9);

        let button_areas: [Rect; 5] =
            Layout::horizontal([Constraint::Ratio(1, 5); 5]).areas(transport);
        let buttons = TransportButton::ALL
            .iter()
            .copied()
            .zip(button_areas)
            .collect();

        Self {
            size: (area.width, area.height),
            now_playing,
            transport,
            status,
            buttons,
        }
    }

    /// Rect of a specific transport button
    pub fn button_bounds(&self, button: TransportButton) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, rect)| *rect)
    }
}

/// Center a panel of at most `max_width` x `max_height` inside an area
fn centered(area: Rect, max_width: u16, max_height: u16) -> Rect {
    let width = max_width.min(area.width);
    let height = max_height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Draw the shell chrome over whatever is already in the frame
pub fn render(
    frame: &mut Frame,
    layout: &ShellLayout,
    player: &PlayerState,
    status: Option<&str>,
    step_size: f32,
    hovered: Option<TransportButton>,
) {
    render_now_playing(frame, layout.now_playing, player);
    for (button, rect) in &layout.buttons {
        render_button(frame, *rect, *button, player.state, hovered == Some(*button));
    }
    render_status(frame, layout.status, status, step_size);
}

fn render_now_playing(frame: &mut Frame, area: Rect, player: &PlayerState) {
    if area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(" NOW PLAYING ", Theme::title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(track) = player.current_track() else {
        frame.render_widget(
            Paragraph::new(Line::styled("queue empty", Theme::dimmed())),
            inner,
        );
        return;
    };

    let [title_row, artist_row, meta_row, _, gauge_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(track.title.clone(), Theme::track_title())).centered(),
        title_row,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(track.artist.clone(), Theme::track_artist())).centered(),
        artist_row,
    );

    let meta = Line::from(vec![
        Span::styled(
            format!("track {}/{}", player.current + 1, player.queue.len()),
            Theme::dimmed(),
        ),
        Span::raw("  "),
        Span::styled(player.state.to_string(), state_style(player.state)),
        Span::raw("  "),
        Span::styled(
            format!("vol {:.0}%", player.volume * 100.0),
            Theme::dimmed(),
        ),
    ]);
    frame.render_widget(Paragraph::new(meta).centered(), meta_row);

    let elapsed = player.elapsed.as_secs();
    let total = track.duration.as_secs();
    frame.render_widget(
        Gauge::default()
            .gauge_style(Theme::progress_bar())
            .ratio(player.progress())
            .label(format!(
                "{}:{:02} / {}:{:02}",
                elapsed / 60,
                elapsed % 60,
                total / 60,
                total % 60
            )),
        gauge_row,
    );
}

fn state_style(state: PlayState) -> ratatui::style::Style {
    match state {
        PlayState::Playing => Theme::success(),
        PlayState::Paused => Theme::warning(),
        PlayState::Stopped => Theme::dimmed(),
    }
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    button: TransportButton,
    state: PlayState,
    hovered: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let (border, label) = if hovered {
        (Theme::border_focused(), Theme::transport_button_hover())
    } else {
        (Theme::border(), Theme::transport_button())
    };

    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Line::styled(button.label(state), label)).centered(),
        inner,
    );
}

fn render_status(frame: &mut Frame, area: Rect, status: Option<&str>, step_size: f32) {
    if area.height == 0 {
        return;
    }

    let line = match status {
        Some(message) => Line::from(vec![Span::styled(message.to_string(), Theme::accent())]),
        None => Line::from(vec![
            Span::styled("←↑↓→", Theme::keybind()),
            Span::styled(" move  ", Theme::keybind_desc()),
            Span::styled("enter", Theme::keybind()),
            Span::styled(" click  ", Theme::keybind_desc()),
            Span::styled("space", Theme::keybind()),
            Span::styled(" play  ", Theme::keybind_desc()),
            Span::styled("+/-", Theme::keybind()),
            Span::styled(format!(" step {:.1}  ", step_size), Theme::keybind_desc()),
            Span::styled("b", Theme::keybind()),
            Span::styled(" sky  ", Theme::keybind_desc()),
            Span::styled("q", Theme::keybind()),
            Span::styled(" quit", Theme::keybind_desc()),
        ]),
    };
    frame.render_widget(Paragraph::new(line).style(Theme::status_bar()), area);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_all_buttons() {
        let layout = ShellLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.buttons.len(), 5);
        for button in TransportButton::ALL {
            assert!(layout.button_bounds(button).is_some());
        }
    }

    #[test]
    fn test_layout_buttons_inside_transport_row() {
        let layout = ShellLayout::compute(Rect::new(0, 0, 80, 24));
        for (_, rect) in &layout.buttons {
            assert!(rect.y >= layout.transport.y);
            assert!(rect.bottom() <= layout.transport.bottom());
            assert!(rect.x >= layout.transport.x);
            assert!(rect.right() <= layout.transport.right());
        }
    }

    #[test]
    fn test_layout_buttons_do_not_overlap() {
        let layout = ShellLayout::compute(Rect::new(0, 0, 80, 24));
        for (i, (_, a)) in layout.buttons.iter().enumerate() {
            for (_, b) in layout.buttons.iter().skip(i + 1) {
                assert!(a.intersection(*b).is_empty(), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_layout_deterministic() {
        let area = Rect::new(0, 0, 120, 40);
        assert_eq!(ShellLayout::compute(area), ShellLayout::compute(area));
    }

    #[test]
    fn test_now_playing_centered_and_bounded() {
        let layout = ShellLayout::compute(Rect::new(0, 0, 200, 50));
        assert!(layout.now_playing.width <= 60);
        assert!(layout.now_playing.height <= 9);

        // Tiny terminals shrink the panel instead of overflowing.
        let small = ShellLayout::compute(Rect::new(0, 0, 20, 10));
        assert!(small.now_playing.width <= 20);
    }

    #[test]
    fn test_play_pause_label_follows_state() {
        assert_eq!(
            TransportButton::PlayPause.label(PlayState::Playing),
            "⏸ pause"
        );
        assert_eq!(TransportButton::PlayPause.label(PlayState::Paused), "⏵ play");
        assert_eq!(
            TransportButton::PlayPause.label(PlayState::Stopped),
            "⏵ play"
        );
    }
}
