//! Work-stack expansion: half-plane partitioning and farthest-point search.
//!
//! The quickhull recursion runs on an explicit stack of (edge, candidate-set)
//! frames. Recursion depth is O(n) on adversarial inputs (one new vertex per
//! step), so the call stack is not used for the expansion itself.

use std::cmp::Ordering;

use crate::geom::{lexicographic_cmp, Line, Point, Side};

use super::types::{Discovery, PointSet};

/// Subset of `points` classified exactly `side` of `line`.
///
/// `OnLine` points fall on neither side: collinear points are dropped here
/// and never become hull vertices.
pub fn partition(points: &PointSet, line: &Line, side: Side) -> PointSet {
    points
        .iter()
        .copied()
        .filter(|p| line.classify(*p) == side)
        .collect()
}

/// Point of `points` farthest from `line`; `None` only for an empty set.
///
/// Distances compare by unnormalized cross-product magnitude. Ties break
/// toward the lexicographically smallest point, so the expansion and its
/// discovery trace are deterministic regardless of set iteration order.
pub fn farthest(points: &PointSet, line: &Line) -> Option<Point> {
    let mut best: Option<(f64, Point)> = None;
    for &p in points {
        let d = line.signed_area(p).abs();
        match best {
            None => best = Some((d, p)),
            Some((best_d, best_p)) => {
                if d > best_d || (d == best_d && lexicographic_cmp(&p, &best_p) == Ordering::Less)
                {
                    best = Some((d, p));
                }
            }
        }
    }
    best.map(|(_, p)| p)
}

/// One pending expansion: a directed border edge and the points strictly to
/// its left.
struct Frame {
    edge: Line,
    points: PointSet,
}

/// Expand one half-plane of the diameter.
///
/// Precondition: every point in `points` lies strictly left (`Above`) of
/// `border`. Only non-empty frames are pushed, and each step removes at
/// least the farthest point from all further frames, so the loop terminates.
pub(super) fn expand(
    border: Line,
    points: PointSet,
    vertices: &mut PointSet,
    trace: &mut Vec<Discovery>,
) {
    let mut stack = Vec::new();
    if !points.is_empty() {
        stack.push(Frame {
            edge: border,
            points,
        });
    }

    while let Some(Frame { edge, mut points }) = stack.pop() {
        // The farthest point from the border is a true hull vertex: nothing
        // on this side lies outside the two candidate edges it induces.
        let furthest = farthest(&points, &edge).expect("frames hold at least one point");
        points.remove(&furthest);
        vertices.insert(furthest);
        trace.push(Discovery {
            vertex: furthest,
            edge: (edge.a(), edge.b()),
        });

        // Directing the new edges a -> furthest -> b keeps the outside of
        // each on its `Above` side, preserving the border's orientation.
        let first = Line::new(edge.a(), furthest);
        let second = Line::new(furthest, edge.b());
        let outside_first = partition(&points, &first, Side::Above);
        let outside_second = partition(&points, &second, Side::Above);

        if !outside_second.is_empty() {
            stack.push(Frame {
                edge: second,
                points: outside_second,
            });
        }
        if !outside_first.is_empty() {
            stack.push(Frame {
                edge: first,
                points: outside_first,
            });
        }
    }
}
