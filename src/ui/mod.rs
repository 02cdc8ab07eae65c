//! Terminal UI components
//!
//! Built with ratatui around a night-sky aesthetic: a starfield backdrop,
//! floating media chrome, and a remote cursor drawn last.

pub mod overlay;
pub mod shell;
pub mod starfield;
pub mod theme;

pub use shell::{ShellLayout, TransportButton};
pub use starfield::{Starfield, StarfieldWidget};
pub use theme::Theme;
