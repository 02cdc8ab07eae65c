//! Remote-control cursor subsystem
//!
//! A small input-routing state machine standing in for a mouse pointer on
//! D-pad-only input devices: directional key presses become continuous 2D
//! cursor motion, and the select key becomes a click resolved against a set
//! of dynamically registered hit targets.
//!
//! The subsystem does not render itself and owns no visual host; it consumes
//! key events and a screen size, and exposes a position plus click dispatch.

pub mod controller;
pub mod region;

pub use controller::{CursorController, DEFAULT_CURSOR_SIZE, DEFAULT_STEP_SIZE};
pub use region::{ClickableRegion, RegionId, RegionRegistry};
