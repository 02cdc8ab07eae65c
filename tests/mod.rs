//! Integration tests for Remotui
//!
//! Tests are organized by component:
//! - cursor_test: cursor controller and clickable region registry
//! - starfield_test: seeded star layout and backdrop widget
//! - ui_test: theme contrast, shell layout, frame rendering
//! - cli_test: flag parsing, validation, config file round-trips
//! - e2e_test: full input flow (keys -> cursor -> click -> playback)

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
