//! 2D geometric primitives for page layout analysis.
//!
//! Coordinates follow the rendered-page convention: origin at the top-left
//! of the page image, `x` growing right, `y` growing down, units in pixels.

use crate::error::GeometryError;

/// A point in page pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Compute where the lines through `(a0, a1)` and `(q0, q1)` cross.
///
/// Each point pair defines an **infinite line**, not a bounded segment: the
/// crossing may lie beyond either pair's endpoints. Callers rely on this to
/// extrapolate region boundaries past their detected extent.
///
/// Uses the perpendicular-dot-product construction: with `da = a1 - a0`,
/// `db = q1 - q0`, and `perp` rotating 90 degrees (`(x, y) -> (-y, x)`), the
/// crossing is `q0 + (perp(da) . (a0 - q0) / perp(da) . db) * db`. The result
/// keeps full floating-point precision even though inputs are usually
/// integer pixel coordinates.
///
/// Returns [`GeometryError::ParallelLines`] when the lines are parallel or
/// coincident and no unique crossing exists.
pub fn intersect_lines(
    a0: Point,
    a1: Point,
    q0: Point,
    q1: Point,
) -> Result<Point, GeometryError> {
    let da = (a1.x - a0.x, a1.y - a0.y);
    let db = (q1.x - q0.x, q1.y - q0.y);
    let dp = (a0.x - q0.x, a0.y - q0.y);

    // perp(da) . db and perp(da) . dp
    let denom = -da.1 * db.0 + da.0 * db.1;
    if denom == 0.0 {
        return Err(GeometryError::ParallelLines);
    }
    let num = -da.1 * dp.0 + da.0 * dp.1;

    let t = num / denom;
    Ok(Point::new(q0.x + t * db.0, q0.y + t * db.1))
}
