//! Clickable region registry
//!
//! UI elements register a rectangular hit target plus a callback while they
//! are on screen and remove it when they unmount or their bounds change.
//! Hit-testing is a linear first-match scan in registration order, so on
//! overlap the earlier registration wins.

use std::fmt;

use tracing::debug;

use crate::models::{Point, Rect};

/// Callback invoked when the cursor clicks inside a region
pub type ClickHandler = Box<dyn FnMut()>;

/// Opaque handle identifying one registered region
///
/// Handles are assigned by the registry and never reused within its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

/// A rectangular hit target paired with its click callback
pub struct ClickableRegion {
    /// Hit bounds in cursor space
    pub bounds: Rect,
    /// Invoked with no arguments on a successful hit
    on_click: ClickHandler,
    /// Whether the owning element considers itself interactive.
    /// Informational: hit-testing does not consult this flag.
    pub enabled: bool,
}

impl ClickableRegion {
    pub fn new(bounds: Rect, on_click: impl FnMut() + 'static) -> Self {
        Self {
            bounds,
            on_click: Box::new(on_click),
            enabled: true,
        }
    }

    /// Override the `enabled` flag (builder style)
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl fmt::Debug for ClickableRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickableRegion")
            .field("bounds", &self.bounds)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Ordered set of clickable regions owned by one cursor controller
#[derive(Default)]
pub struct RegionRegistry {
    /// Registration order is dispatch priority order
    entries: Vec<(RegionId, ClickableRegion)>,
    next_id: u64,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region; returns the handle used to unregister it
    pub fn register(&mut self, region: ClickableRegion) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        debug!(%id, bounds = ?region.bounds, "register clickable region");
        self.entries.push((id, region));
        id
    }

    /// Remove a region by handle; unknown handles are a no-op
    pub fn unregister(&mut self, id: RegionId) {
        let before = self.entries.len();
        self.entries.retain(|(rid, _)| *rid != id);
        if self.entries.len() != before {
            debug!(%id, "unregister clickable region");
        }
    }

    /// Drop every registered region
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!(count = self.entries.len(), "clear clickable regions");
        }
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First region (in registration order) whose bounds contain the point
    pub fn find_at(&self, point: Point) -> Option<RegionId> {
        self.entries
            .iter()
            .find(|(_, region)| region.bounds.contains(point))
            .map(|(id, _)| *id)
    }

    /// Bounds of a registered region, if the handle is live
    pub fn bounds_of(&self, id: RegionId) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(rid, _)| *rid == id)
            .map(|(_, region)| region.bounds)
    }

    /// Hit-test the point and invoke the first match's callback
    ///
    /// Returns the id of the region that fired, or `None` if nothing was hit.
    /// A panic inside the callback propagates to the caller unchanged.
    pub fn dispatch_at(&mut self, point: Point) -> Option<RegionId> {
        let hit = self
            .entries
            .iter_mut()
            .find(|(_, region)| region.bounds.contains(point));
        match hit {
            Some((id, region)) => {
                let id = *id;
                (region.on_click)();
                Some(id)
            }
            None => None,
        }
    }
}

impl fmt::Debug for RegionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionRegistry")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
