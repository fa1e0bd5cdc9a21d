//! Divide-and-conquer convex hull (quickhull).
//!
//! Purpose
//! - `convex_hull` is the orchestrator: it validates input, deduplicates,
//!   picks the lexicographic extremes as the initial diameter, splits the
//!   plane along it, and runs the work-stack engine on each half.
//!
//! Why divide-and-conquer
//! - The farthest point from a border edge is always a true hull vertex, and
//!   every expansion step keeps only points strictly outside the two new
//!   candidate edges, so the candidate set shrinks monotonically and the
//!   loop terminates.

mod engine;
mod types;

pub use engine::{farthest, partition};
pub use types::{Discovery, Hull, HullError, PointSet};

use crate::geom::{lexicographic_cmp, Line, Point, Side};

/// Convex hull of `points`.
///
/// Duplicate coordinates collapse to one point before the algorithm runs.
/// Zero, one, or two distinct points are returned as-is. Points collinear
/// with a border edge are excluded, so a fully collinear input yields only
/// its two lexicographic extremes.
///
/// The result is an unordered vertex set plus a discovery trace; see
/// [`Hull::polygon`] for boundary reconstruction.
///
/// # Errors
///
/// [`HullError::NonFinite`] if any coordinate is NaN or infinite. Validation
/// happens up front; the engine never sees non-finite values.
pub fn convex_hull(points: &[Point]) -> Result<Hull, HullError> {
    for p in points {
        if !p.is_finite() {
            return Err(HullError::NonFinite { x: p.x(), y: p.y() });
        }
    }

    let unique: PointSet = points.iter().copied().collect();
    if unique.len() <= 2 {
        let diameter = if unique.len() == 2 {
            let mut pair: Vec<Point> = unique.iter().copied().collect();
            pair.sort_by(lexicographic_cmp);
            Some((pair[0], pair[1]))
        } else {
            None
        };
        return Ok(Hull {
            vertices: unique,
            diameter,
            discoveries: Vec::new(),
        });
    }

    // The lexicographic extremes are hull vertices: nothing lies beyond them
    // in the x-then-y direction.
    let min = unique
        .iter()
        .copied()
        .min_by(lexicographic_cmp)
        .expect("set has at least three points");
    let max = unique
        .iter()
        .copied()
        .max_by(lexicographic_cmp)
        .expect("set has at least three points");

    let mut vertices = PointSet::new();
    vertices.insert(min);
    vertices.insert(max);
    let mut discoveries = Vec::new();

    // The reversed diameter orients the lower half-plane so that both halves
    // are expanded on their `Above` (strictly left) side.
    let upper = Line::new(min, max);
    let lower = upper.reversed();
    let above = partition(&unique, &upper, Side::Above);
    let below = partition(&unique, &lower, Side::Above);

    engine::expand(upper, above, &mut vertices, &mut discoveries);
    engine::expand(lower, below, &mut vertices, &mut discoveries);

    Ok(Hull {
        vertices,
        diameter: Some((min, max)),
        discoveries,
    })
}

#[cfg(test)]
mod tests;
