//! D-pad cursor controller
//!
//! Translates discrete directional key presses into continuous 2D cursor
//! motion, clamped to the screen, and resolves Enter presses into click
//! dispatch against the region registry. Synchronous and single-threaded:
//! every call completes before returning, driven by whatever thread delivers
//! input events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, trace};

use super::region::{ClickableRegion, RegionId, RegionRegistry};
use crate::models::{Point, Size};

/// Pixels moved per directional key press unless reconfigured
pub const DEFAULT_STEP_SIZE: f32 = 40.0;

/// Visual footprint of the cursor glyph unless reconfigured
pub const DEFAULT_CURSOR_SIZE: Size = Size {
    width: 28.0,
    height: 28.0,
};

/// Handler invoked when a click lands on no registered region
pub type FallbackClickHandler = Box<dyn FnMut(Point)>;

/// Owns cursor position, step size, screen bounds, and the clickable region
/// registry; processes key events and position updates.
///
/// The position invariant holds after every mutation: both coordinates stay
/// within `[0, max(0, screen - cursor)]` on their axis.
pub struct CursorController {
    position: Point,
    step_size: f32,
    screen_bounds: Size,
    cursor_size: Size,
    regions: RegionRegistry,
    fallback_click: Option<FallbackClickHandler>,
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorController {
    pub fn new() -> Self {
        Self {
            position: Point::ZERO,
            step_size: DEFAULT_STEP_SIZE,
            screen_bounds: Size::ZERO,
            cursor_size: DEFAULT_CURSOR_SIZE,
            regions: RegionRegistry::new(),
            fallback_click: None,
        }
    }

    // -------------------------------------------------------------------------
    // State Accessors
    // -------------------------------------------------------------------------

    /// Top-left corner of the cursor's bounding box
    pub fn position(&self) -> Point {
        self.position
    }

    /// Geometric center of the cursor glyph (the click point)
    pub fn center(&self) -> Point {
        self.position.offset(
            self.cursor_size.width / 2.0,
            self.cursor_size.height / 2.0,
        )
    }

    pub fn step_size(&self) -> f32 {
        self.step_size
    }

    pub fn set_step_size(&mut self, step_size: f32) {
        self.step_size = step_size;
    }

    pub fn screen_bounds(&self) -> Size {
        self.screen_bounds
    }

    pub fn cursor_size(&self) -> Size {
        self.cursor_size
    }

    /// Change the cursor footprint; the position is re-clamped against the
    /// new movement bounds.
    pub fn set_cursor_size(&mut self, cursor_size: Size) {
        self.cursor_size = cursor_size;
        self.position = self.clamped(self.position);
    }

    /// Configure the handler that receives clicks landing on no region
    pub fn set_fallback_click(&mut self, handler: impl FnMut(Point) + 'static) {
        self.fallback_click = Some(Box::new(handler));
    }

    // -------------------------------------------------------------------------
    // Initialization
    // -------------------------------------------------------------------------

    /// Set the screen bounds and recenter the cursor
    ///
    /// This is an absolute reset, not a relative move: the previous position
    /// does not influence the result, so repeated calls with the same size
    /// are idempotent and it is safe to call on every layout pass. The
    /// centered result is clamped so the position invariant also holds on
    /// screens smaller than the cursor.
    pub fn initialize(&mut self, screen: Size) {
        self.screen_bounds = screen;
        let centered = Point::new(
            (screen.width - self.cursor_size.width) / 2.0,
            (screen.height - self.cursor_size.height) / 2.0,
        );
        self.position = self.clamped(centered);
        trace!(screen = %screen, position = %self.position, "cursor initialized");
    }

    // -------------------------------------------------------------------------
    // Key Event Handling
    // -------------------------------------------------------------------------

    /// Process a key event, returning `true` if it was consumed
    ///
    /// Only key-down (`Press`) events are processed; repeats and releases are
    /// not consumed and cause no state change. Arrow keys move the cursor by
    /// one step; Enter (the remote's select/center button) clicks at the
    /// cursor center. Any other key is left for the caller's own handlers.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Left => {
                self.move_by(-self.step_size, 0.0);
                true
            }
            KeyCode::Right => {
                self.move_by(self.step_size, 0.0);
                true
            }
            KeyCode::Up => {
                self.move_by(0.0, -self.step_size);
                true
            }
            KeyCode::Down => {
                self.move_by(0.0, self.step_size);
                true
            }
            KeyCode::Enter => {
                self.click();
                true
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------------

    /// Move by a delta, stopping at the screen edge
    fn move_by(&mut self, dx: f32, dy: f32) {
        self.position = self.clamped(self.position.offset(dx, dy));
        trace!(position = %self.position, "cursor moved");
    }

    /// Set the position directly (pointer-style input fallback), with the
    /// same clamping as relative movement
    pub fn set_position(&mut self, position: Point) {
        self.position = self.clamped(position);
    }

    /// Clamp a candidate position into the movement bounds
    fn clamped(&self, candidate: Point) -> Point {
        let max_x = (self.screen_bounds.width - self.cursor_size.width).max(0.0);
        let max_y = (self.screen_bounds.height - self.cursor_size.height).max(0.0);
        Point {
            x: candidate.x.clamp(0.0, max_x),
            y: candidate.y.clamp(0.0, max_y),
        }
    }

    // -------------------------------------------------------------------------
    // Click Dispatch
    // -------------------------------------------------------------------------

    /// Click at the cursor center: the first matching region's callback fires
    /// exclusively; with no match, the fallback handler (if configured) gets
    /// the click point. At most one handler runs per click.
    fn click(&mut self) {
        let point = self.center();
        match self.regions.dispatch_at(point) {
            Some(id) => {
                debug!(%id, point = %point, "cursor click dispatched to region");
            }
            None => {
                debug!(point = %point, "cursor click fell through to fallback");
                if let Some(handler) = &mut self.fallback_click {
                    handler(point);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Region Registry
    // -------------------------------------------------------------------------

    /// Register a clickable region; later dispatch prefers earlier entries
    pub fn register_region(&mut self, region: ClickableRegion) -> RegionId {
        self.regions.register(region)
    }

    /// Remove a region by handle; unknown handles are a no-op
    pub fn unregister_region(&mut self, id: RegionId) {
        self.regions.unregister(id);
    }

    /// Drop all registered regions
    pub fn clear_regions(&mut self) {
        self.regions.clear();
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// First registered region containing the point, if any
    pub fn region_at(&self, point: Point) -> Option<RegionId> {
        self.regions.find_at(point)
    }
}

impl std::fmt::Debug for CursorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorController")
            .field("position", &self.position)
            .field("step_size", &self.step_size)
            .field("screen_bounds", &self.screen_bounds)
            .field("cursor_size", &self.cursor_size)
            .field("regions", &self.regions)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
