use std::cmp::Ordering;

use nalgebra::Vector2;

use super::types::Point;

/// Cross product of `b - a` and `c - a`.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Total order on points: `x` first, then `y`.
///
/// Coordinates entering the hull are finite, so `partial_cmp` cannot fail;
/// the fallback keeps the comparator total regardless.
#[inline]
pub fn lexicographic_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x().partial_cmp(&b.x()).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y().partial_cmp(&b.y()).unwrap_or(Ordering::Equal),
        o => o,
    }
}
