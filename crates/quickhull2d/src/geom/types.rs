//! Point and separator types.
//!
//! - `Point`: immutable 2D coordinate with value-based equality and hashing.
//! - `Side`: half-plane classification result.
//! - `Line`: directed separator with cross-product classification.

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use super::util::cross;

/// Immutable 2D point with value-based equality on `(x, y)`.
///
/// Invariants:
/// - `-0.0` is canonicalized to `+0.0` at construction, so bitwise equality
///   (used for `Eq` and `Hash`) agrees with numeric equality.
/// - Finiteness is enforced at the `convex_hull` boundary, not here.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        // +0.0 and -0.0 must land in the same hash bucket.
        let x = if x == 0.0 { 0.0 } else { x };
        let y = if y == 0.0 { 0.0 } else { y };
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Coordinates as a nalgebra vector for vector arithmetic.
    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.x.to_bits());
        state.write_u64(self.y.to_bits());
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Half-plane classification of a point against a directed separator.
///
/// `Above` is strictly left of the direction `a -> b`, `Below` strictly
/// right, `OnLine` exactly on the line (cross product exactly zero).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Above,
    Below,
    OnLine,
}

impl Side {
    /// The other strict side; `OnLine` is its own opposite.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Above => Side::Below,
            Side::Below => Side::Above,
            Side::OnLine => Side::OnLine,
        }
    }
}

/// Directed separator from endpoint `a` to endpoint `b`.
///
/// Classification uses the sign of the cross product `(b - a) x (p - a)`,
/// so vertical separators need no special case. Reversing the direction
/// swaps the `Above` and `Below` half-planes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    a: Point,
    b: Point,
}

impl Line {
    /// Separator through two distinct points.
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        debug_assert!(a != b, "separator endpoints must be distinct");
        Self { a, b }
    }

    /// Separator for `y = slope * x + intercept`, directed toward +x.
    #[inline]
    pub fn from_slope_intercept(slope: f64, intercept: f64) -> Self {
        Self::new(
            Point::new(0.0, intercept),
            Point::new(1.0, slope + intercept),
        )
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    /// Same locus, opposite direction; swaps `Above` and `Below`.
    #[inline]
    pub fn reversed(&self) -> Line {
        Line {
            a: self.b,
            b: self.a,
        }
    }

    /// Cross product `(b - a) x (p - a)`: positive strictly left of the
    /// directed line, negative strictly right, zero on the line.
    ///
    /// Proportional to the Euclidean distance of `p` from the line, so it is
    /// the comparison-grade quantity for farthest-point searches.
    #[inline]
    pub fn signed_area(&self, p: Point) -> f64 {
        cross(self.a.coords(), self.b.coords(), p.coords())
    }

    /// Which half-plane `p` lies in. `OnLine` iff the cross product is
    /// exactly zero.
    #[inline]
    pub fn classify(&self, p: Point) -> Side {
        let s = self.signed_area(p);
        if s > 0.0 {
            Side::Above
        } else if s < 0.0 {
            Side::Below
        } else {
            Side::OnLine
        }
    }

    /// True Euclidean distance from `p` to the line. The only operation here
    /// that divides.
    #[inline]
    pub fn perpendicular_distance(&self, p: Point) -> f64 {
        self.signed_area(p).abs() / (self.b.coords() - self.a.coords()).norm()
    }
}
