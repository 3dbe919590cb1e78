use crate::foundation::core::{Point, Rect, Vec2, laid_out};

/// Pointer position relative to a reference element.
///
/// The normalized offset lies in `[-0.5, 0.5]` on each axis with `(0, 0)` at the element's
/// center. Leaving the element puts the pointer back at that center, so the local position
/// rests at half the box size while the other two views rest at zero.
#[derive(Clone, Debug)]
pub struct PointerParallax {
    bounds: Option<Rect>,
    enabled: bool,
    inside: bool,
    normalized: Vec2,
    local: Vec2,
    from_center: Vec2,
}

impl Default for PointerParallax {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerParallax {
    pub fn new() -> Self {
        Self {
            bounds: None,
            enabled: true,
            inside: false,
            normalized: Vec2::ZERO,
            local: Vec2::ZERO,
            from_center: Vec2::ZERO,
        }
    }

    /// Updates the element's bounding box. A box with no area makes the source not ready.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = laid_out(bounds);
        if self.bounds.is_none() || !self.inside {
            self.clear();
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Disabled sources ignore moves and sit at rest (desktop-only effects on narrow screens).
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Feeds a pointer position in client coordinates. Returns the normalized offset.
    pub fn on_move(&mut self, client: Point) -> Vec2 {
        let Some(bounds) = self.bounds.filter(|_| self.enabled) else {
            return self.normalized;
        };
        if !client.x.is_finite() || !client.y.is_finite() {
            return self.normalized;
        }

        let size = bounds.size();
        let local = client - bounds.origin();
        self.local = Vec2::new(local.x.clamp(0.0, size.width), local.y.clamp(0.0, size.height));
        self.normalized = Vec2::new(
            self.local.x / size.width - 0.5,
            self.local.y / size.height - 0.5,
        );
        self.from_center = client - bounds.center();
        self.inside = true;
        self.normalized
    }

    pub fn on_leave(&mut self) -> Vec2 {
        self.clear();
        self.normalized
    }

    /// Offset in `[-0.5, 0.5]²`.
    pub fn normalized(&self) -> Vec2 {
        self.normalized
    }

    /// Position inside the element's box, in pixels from its top-left corner. Rests at the
    /// box center.
    pub fn local(&self) -> Vec2 {
        self.local
    }

    /// Pixels from the element's center; drives magnetic buttons.
    pub fn from_center(&self) -> Vec2 {
        self.from_center
    }

    fn clear(&mut self) {
        self.inside = false;
        self.normalized = Vec2::ZERO;
        self.local = self
            .bounds
            .map_or(Vec2::ZERO, |b| Vec2::new(b.width() * 0.5, b.height() * 0.5));
        self.from_center = Vec2::ZERO;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/pointer.rs"]
mod tests;
