//! Remotui - remote-cursor media shell for the terminal
//!
//! A night-sky terminal interface navigated the way a TV remote navigates a
//! screen: arrow keys drive a free-moving on-screen cursor, Enter clicks
//! whatever sits under it. Decorative chrome (an animated starfield) floats
//! behind a small media shell whose transport buttons are ordinary clickable
//! regions.
//!
//! # Modules
//!
//! - `models` - Geometry primitives and the demo playback model
//! - `cursor` - D-pad cursor controller and clickable region registry
//! - `ui` - Starfield backdrop, theme, shell chrome, cursor overlay
//! - `app` - Application state, input routing, click action channel
//! - `config` - TOML configuration
//! - `cli` - Command line flags

pub mod app;
pub mod cli;
pub mod config;
pub mod cursor;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use app::{App, ShellAction};
pub use cli::Cli;
pub use config::Config;
pub use cursor::{ClickableRegion, CursorController, RegionId, RegionRegistry};
pub use models::{PlayState, PlayerState, Point, Rect, Size, Track};
pub use ui::{ShellLayout, Starfield, Theme, TransportButton};
