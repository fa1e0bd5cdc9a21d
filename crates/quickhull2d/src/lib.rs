//! Divide-and-conquer 2D convex hulls (quickhull).
//!
//! The crate splits into two layers:
//! - [`geom`]: points and directed separators with cross-product half-plane
//!   classification (no slope/intercept division, vertical separators included).
//! - [`hull`]: half-plane partitioning, farthest-point search, and the
//!   work-stack expansion driven by [`hull::convex_hull`].
//!
//! Results are unordered vertex sets. When a caller needs a polygon boundary,
//! [`hull::Hull::polygon`] reconstructs one in counterclockwise order from the
//! discovery trace recorded during expansion.

pub mod geom;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Line, Point, Side};
pub use hull::{convex_hull, Hull, HullError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_point_cloud, CloudCfg, ReplayToken};
    pub use crate::geom::{lexicographic_cmp, Line, Point, Side};
    pub use crate::hull::{
        convex_hull, farthest, partition, Discovery, Hull, HullError, PointSet,
    };
}
