//! 2D primitives for the hull engine.
//!
//! Purpose
//! - Provide the point and separator types the hull engine builds on, with
//!   numerically explicit classification (cross products, exact zero for
//!   collinearity).
//!
//! Why cross products
//! - A slope/intercept side test divides by `b.x - a.x` and breaks for
//!   vertical separators, and a "compare y at this x" test misclassifies
//!   points against steep lines. The cross-product test is total and needs
//!   no division; division is deferred to true-distance queries.

pub mod rand;
mod types;
mod util;

pub use types::{Line, Point, Side};
pub use util::lexicographic_cmp;
