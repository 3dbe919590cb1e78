use crate::foundation::error::{ApertureError, ApertureResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Visible area of the scrolling surface, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ApertureResult<Self> {
        let vp = Self { width, height };
        if !vp.is_ready() {
            return Err(ApertureError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        Ok(vp)
    }

    /// Hosts report `0x0` before first layout; such a viewport must not drive any math.
    pub fn is_ready(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn ready(self) -> Option<Self> {
        self.is_ready().then_some(self)
    }
}

/// Returns the box only if it has finite coordinates and a non-zero area.
pub fn laid_out(rect: Rect) -> Option<Rect> {
    let finite = rect.x0.is_finite()
        && rect.y0.is_finite()
        && rect.x1.is_finite()
        && rect.y1.is_finite();
    (finite && rect.width() > 0.0 && rect.height() > 0.0).then_some(rect)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
