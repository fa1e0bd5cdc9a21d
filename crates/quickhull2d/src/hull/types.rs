//! Data types for the hull engine and its result.
//!
//! Kept small and explicit to make the `engine` module easy to read.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::geom::{lexicographic_cmp, Point};

/// Unordered collection of unique points (value equality on coordinates).
pub type PointSet = HashSet<Point>;

/// Input validation errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HullError {
    /// A coordinate was NaN or infinite; rejected before any computation.
    NonFinite { x: f64, y: f64 },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::NonFinite { x, y } => {
                write!(f, "non-finite input coordinate ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for HullError {}

/// One expansion step: `vertex` was the farthest point from `edge`.
///
/// The trace is recorded parent-before-child, so replaying it against the
/// diameter reconstructs the boundary in one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Discovery {
    pub vertex: Point,
    /// Directed border edge the vertex was discovered against.
    pub edge: (Point, Point),
}

/// Convex hull result: unordered vertices plus the discovery trace.
#[derive(Clone, Debug, Default)]
pub struct Hull {
    pub(crate) vertices: PointSet,
    pub(crate) diameter: Option<(Point, Point)>,
    pub(crate) discoveries: Vec<Discovery>,
}

impl Hull {
    /// Hull vertices. No ordering guarantee.
    #[inline]
    pub fn vertices(&self) -> &PointSet {
        &self.vertices
    }

    /// Consume the hull, keeping only the vertex set.
    #[inline]
    pub fn into_vertices(self) -> PointSet {
        self.vertices
    }

    /// Lexicographic extremes the expansion started from. `None` for inputs
    /// with fewer than two distinct points.
    #[inline]
    pub fn diameter(&self) -> Option<(Point, Point)> {
        self.diameter
    }

    /// Expansion trace, one record per vertex beyond the diameter endpoints.
    #[inline]
    pub fn discoveries(&self) -> &[Discovery] {
        &self.discoveries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.vertices.contains(&p)
    }

    /// Boundary polygon in counterclockwise order, reconstructed from the
    /// discovery trace.
    ///
    /// Each discovered vertex splits its border edge `(a, b)` into `(a, v)`
    /// and `(v, b)`; walking the split edges from the diameter visits every
    /// vertex once. Degenerate hulls (fewer than three vertices) fall back
    /// to lexicographic order.
    pub fn polygon(&self) -> Vec<Point> {
        let Some((min, max)) = self.diameter else {
            let mut out: Vec<Point> = self.vertices.iter().copied().collect();
            out.sort_by(lexicographic_cmp);
            return out;
        };

        let splits: HashMap<(Point, Point), Point> = self
            .discoveries
            .iter()
            .map(|d| (d.edge, d.vertex))
            .collect();

        // Depth-first walk over split edges, emitting each edge's source
        // vertex. Seeding upper-before-lower yields the cycle in clockwise
        // order; reverse for counterclockwise.
        let mut order = Vec::with_capacity(self.vertices.len());
        let mut stack = vec![(max, min), (min, max)];
        while let Some((a, b)) = stack.pop() {
            if let Some(&v) = splits.get(&(a, b)) {
                stack.push((v, b));
                stack.push((a, v));
            } else {
                order.push(a);
            }
        }
        debug_assert_eq!(order.len(), self.vertices.len());

        if order.len() < 3 {
            order.sort_by(lexicographic_cmp);
        } else {
            order.reverse();
        }
        order
    }
}
