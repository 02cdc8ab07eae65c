//! App state and input routing
//!
//! Owns the cursor controller, the demo playback model, and the starfield,
//! and wires them together: layout changes re-register the transport buttons
//! as clickable regions, key events go to the cursor first, and region
//! callbacks feed transport actions back through a channel so click handlers
//! never need to borrow the app.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect as TermRect;
use tracing::{debug, info};

use crate::config::Config;
use crate::cursor::{ClickableRegion, CursorController};
use crate::models::{PlayState, PlayerState, Point, Rect, Size};
use crate::ui::shell::{ShellLayout, TransportButton};
use crate::ui::Starfield;

// =============================================================================
// Shell Actions
// =============================================================================

/// Actions emitted by click callbacks and applied by the app
///
/// Region callbacks run inside the cursor controller; sending a value through
/// a channel instead of mutating state directly keeps the callbacks free of
/// any reference to the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellAction {
    /// A transport button was clicked
    Transport(TransportButton),
    /// A click landed on empty sky; carries the click point
    Background(Point),
}

// =============================================================================
// Application State
// =============================================================================

/// Main application state
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Remote cursor controller (cell-space: one terminal cell per unit)
    pub cursor: CursorController,
    /// Demo playback state driven by the transport buttons
    pub player: PlayerState,
    /// Seeded star layout for the backdrop
    pub starfield: Starfield,
    /// Backdrop visibility toggle
    pub starfield_enabled: bool,
    /// Last action feedback shown in the status line
    pub status: Option<String>,

    /// Chrome layout for the current terminal size
    layout: Option<ShellLayout>,
    /// Pending actions from click callbacks
    actions: Receiver<ShellAction>,
    /// Cloned into every region callback
    tx: Sender<ShellAction>,
}

impl App {
    /// Create the app from a loaded configuration
    pub fn new(config: &Config) -> Self {
        let (tx, actions) = channel();

        let mut cursor = CursorController::new();
        // The shell maps one terminal cell to one cursor unit.
        cursor.set_cursor_size(Size::new(1.0, 1.0));
        cursor.set_step_size(config.step_size);

        let fallback_tx = tx.clone();
        cursor.set_fallback_click(move |point| {
            let _ = fallback_tx.send(ShellAction::Background(point));
        });

        Self {
            running: true,
            cursor,
            player: PlayerState::demo(),
            starfield: Starfield::new(config.star_seed, config.star_count),
            starfield_enabled: config.starfield,
            status: None,
            layout: None,
            actions,
            tx,
        }
    }

    /// Chrome layout for the current terminal size, once synced
    pub fn layout(&self) -> Option<&ShellLayout> {
        self.layout.as_ref()
    }

    // -------------------------------------------------------------------------
    // Layout Lifecycle
    // -------------------------------------------------------------------------

    /// Recompute chrome layout if the terminal size changed
    ///
    /// On a size change the transport buttons are unmounted and re-registered
    /// from the new rects (degenerate rects are skipped) and the cursor is
    /// re-initialized, recentering it on the new screen. Calling this every
    /// frame is cheap: an unchanged size returns immediately.
    pub fn sync_layout(&mut self, area: TermRect) {
        if self
            .layout
            .as_ref()
            .is_some_and(|l| l.size == (area.width, area.height))
        {
            return;
        }

        let layout = ShellLayout::compute(area);
        self.cursor
            .initialize(Size::new(f32::from(area.width), f32::from(area.height)));

        self.cursor.clear_regions();
        for (button, rect) in &layout.buttons {
            let bounds = Rect::from(*rect);
            if bounds.is_empty() {
                continue;
            }
            let tx = self.tx.clone();
            let button = *button;
            self.cursor.register_region(ClickableRegion::new(bounds, move || {
                let _ = tx.send(ShellAction::Transport(button));
            }));
        }

        debug!(
            width = area.width,
            height = area.height,
            regions = self.cursor.region_count(),
            "layout synced"
        );
        self.layout = Some(layout);
    }

    /// Transport button currently under the cursor's click point
    pub fn hovered_button(&self) -> Option<TransportButton> {
        let layout = self.layout.as_ref()?;
        let center = self.cursor.center();
        layout
            .buttons
            .iter()
            .find(|(_, rect)| Rect::from(*rect).contains(center))
            .map(|(button, _)| *button)
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a keyboard event, returns true if it was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Global quit shortcut
        if key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.quit();
            return true;
        }

        // The cursor gets first refusal; it ignores non-press events itself.
        if self.cursor.handle_key(key) {
            self.drain_actions();
            return true;
        }

        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                true
            }
            KeyCode::Char(' ') => {
                self.player.toggle();
                self.status = Some(self.transport_status());
                true
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let step = self.cursor.step_size() + 1.0;
                self.cursor.set_step_size(step);
                self.status = Some(format!("step size {:.1}", step));
                true
            }
            KeyCode::Char('-') => {
                let step = (self.cursor.step_size() - 1.0).max(1.0);
                self.cursor.set_step_size(step);
                self.status = Some(format!("step size {:.1}", step));
                true
            }
            KeyCode::Char('b') => {
                self.starfield_enabled = !self.starfield_enabled;
                self.status = Some(if self.starfield_enabled {
                    "starfield on".into()
                } else {
                    "starfield off".into()
                });
                true
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Action Application
    // -------------------------------------------------------------------------

    /// Apply every pending click action to the playback model
    fn drain_actions(&mut self) {
        while let Ok(action) = self.actions.try_recv() {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: ShellAction) {
        debug!(?action, "shell action");
        match action {
            ShellAction::Transport(TransportButton::Previous) => {
                self.player.prev();
                self.status = Some(self.track_status("⏮"));
            }
            ShellAction::Transport(TransportButton::PlayPause) => {
                self.player.toggle();
                self.status = Some(self.transport_status());
            }
            ShellAction::Transport(TransportButton::Next) => {
                self.player.next();
                self.status = Some(self.track_status("⏭"));
            }
            ShellAction::Transport(TransportButton::VolumeDown) => {
                self.player.volume_down();
                self.status = Some(format!("vol {:.0}%", self.player.volume * 100.0));
            }
            ShellAction::Transport(TransportButton::VolumeUp) => {
                self.player.volume_up();
                self.status = Some(format!("vol {:.0}%", self.player.volume * 100.0));
            }
            ShellAction::Background(point) => {
                self.status = Some(format!("nothing under cursor at {}", point));
            }
        }
    }

    fn transport_status(&self) -> String {
        match self.player.state {
            PlayState::Playing => "⏵ playing".into(),
            PlayState::Paused => "⏸ paused".into(),
            PlayState::Stopped => "⏹ stopped".into(),
        }
    }

    fn track_status(&self, prefix: &str) -> String {
        match self.player.current_track() {
            Some(track) => format!("{} {}", prefix, track.title),
            None => format!("{} queue empty", prefix),
        }
    }

    // -------------------------------------------------------------------------
    // Time
    // -------------------------------------------------------------------------

    /// Advance playback time and pick up any stray pending actions
    pub fn tick(&mut self, dt: Duration) {
        self.drain_actions();
        self.player.tick(dt);
    }

    /// Quit the application
    pub fn quit(&mut self) {
        info!("quit requested");
        self.running = false;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
