use crate::{
    foundation::core::{BezPath, Point, Viewport},
    foundation::math::lerp,
};

/// Outline of the preloader curtain.
///
/// At `lift = 0` the curtain covers the viewport and its bottom edge sags `bulge` pixels below
/// the fold in a quadratic curve. At `lift = 1` every point sits on the top edge, so the shape
/// has no area.
pub fn curtain_path(viewport: Viewport, bulge: f64, lift: f64) -> BezPath {
    let lift = if lift.is_nan() { 0.0 } else { lift.clamp(0.0, 1.0) };
    let (w, h) = (viewport.width, viewport.height);
    let bottom = lerp(h, 0.0, lift);
    let sag = lerp(h + bulge, 0.0, lift);

    let mut path = BezPath::new();
    path.move_to(Point::new(0.0, 0.0));
    path.line_to(Point::new(w, 0.0));
    path.line_to(Point::new(w, bottom));
    path.quad_to(Point::new(w / 2.0, sag), Point::new(0.0, bottom));
    path.close_path();
    path
}
