//! Data structures and types for Remotui
//!
//! Contains the shared models used across the application organized by domain:
//! - **Geometry**: float pixel-space primitives for the cursor layer
//! - **Playback**: demo track queue and transport state for the media shell

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// =============================================================================
// Geometry
// =============================================================================

/// A point in screen space (pixels, origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by a delta
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.0}, {:.0})", self.x, self.y)
    }
}

/// A width/height pair in screen space
///
/// Negative dimensions are clamped to zero at construction, so downstream
/// bounds math never sees a negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}x{:.0}", self.width, self.height)
    }
}

/// An axis-aligned rectangle in screen space
///
/// Containment is inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rect from a top-left origin and a size
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whether the rect has no area (degenerate bounds)
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Point-in-rect test, inclusive on every edge
    pub fn contains(&self, point: Point) -> bool {
        self.left <= point.x
            && point.x <= self.right
            && self.top <= point.y
            && point.y <= self.bottom
    }

    /// Center of the rect
    pub fn center(&self) -> Point {
        Point {
            x: (self.left + self.right) / 2.0,
            y: (self.top + self.bottom) / 2.0,
        }
    }
}

impl From<ratatui::layout::Rect> for Rect {
    /// Bridge a terminal cell rect into cursor space (one cell = one unit)
    fn from(r: ratatui::layout::Rect) -> Self {
        Self {
            left: f32::from(r.x),
            top: f32::from(r.y),
            right: f32::from(r.x) + f32::from(r.width),
            bottom: f32::from(r.y) + f32::from(r.height),
        }
    }
}

// =============================================================================
// Playback Models
// =============================================================================

/// Transport state of the demo player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    Playing,
    Paused,
    Stopped,
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayState::Playing => write!(f, "playing"),
            PlayState::Paused => write!(f, "paused"),
            PlayState::Stopped => write!(f, "stopped"),
        }
    }
}

/// A queued track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub duration: Duration,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, secs: u64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration: Duration::from_secs(secs),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.duration.as_secs();
        write!(
            f,
            "{} — {} ({}:{:02})",
            self.title,
            self.artist,
            secs / 60,
            secs % 60
        )
    }
}

/// Playback state driving the shell chrome
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Track queue
    pub queue: Vec<Track>,
    /// Index of the current track
    pub current: usize,
    /// Transport state
    pub state: PlayState,
    /// Volume in [0.0, 1.0]
    pub volume: f32,
    /// Elapsed time within the current track
    pub elapsed: Duration,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            queue: Vec::new(),
            current: 0,
            state: PlayState::Stopped,
            volume: 0.8,
            elapsed: Duration::ZERO,
        }
    }
}

impl PlayerState {
    /// Demo queue shown by the shell
    pub fn demo() -> Self {
        Self {
            queue: vec![
                Track::new("Aurora Transit", "Solar Winds", 254),
                Track::new("Perihelion", "Night Freight", 198),
                Track::new("Cassiopeia Drift", "The Parallax", 312),
                Track::new("Low Orbit Lullaby", "Solar Winds", 227),
            ],
            state: PlayState::Paused,
            ..Self::default()
        }
    }

    /// Currently playing track, if the queue is non-empty
    pub fn current_track(&self) -> Option<&Track> {
        self.queue.get(self.current)
    }

    /// Toggle between playing and paused (stopped resumes playback)
    pub fn toggle(&mut self) {
        self.state = match self.state {
            PlayState::Playing => PlayState::Paused,
            PlayState::Paused | PlayState::Stopped => PlayState::Playing,
        };
    }

    /// Advance to the next track, wrapping at the end of the queue
    pub fn next(&mut self) {
        if !self.queue.is_empty() {
            self.current = (self.current + 1) % self.queue.len();
            self.elapsed = Duration::ZERO;
        }
    }

    /// Go back to the previous track, wrapping at the start
    pub fn prev(&mut self) {
        if !self.queue.is_empty() {
            self.current = (self.current + self.queue.len() - 1) % self.queue.len();
            self.elapsed = Duration::ZERO;
        }
    }

    /// Raise volume by one step, capped at 1.0
    pub fn volume_up(&mut self) {
        self.volume = (self.volume + 0.1).min(1.0);
    }

    /// Lower volume by one step, floored at 0.0
    pub fn volume_down(&mut self) {
        self.volume = (self.volume - 0.1).max(0.0);
    }

    /// Advance playback time; auto-advances to the next track at the end
    pub fn tick(&mut self, dt: Duration) {
        if self.state != PlayState::Playing {
            return;
        }
        self.elapsed += dt;
        if let Some(track) = self.current_track() {
            if self.elapsed >= track.duration {
                self.next();
            }
        }
    }

    /// Fraction of the current track played, in [0.0, 1.0]
    pub fn progress(&self) -> f64 {
        match self.current_track() {
            Some(track) if !track.duration.is_zero() => {
                (self.elapsed.as_secs_f64() / track.duration.as_secs_f64()).min(1.0)
            }
            _ => 0.0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
