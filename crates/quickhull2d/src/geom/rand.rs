//! Random point clouds (uniform square + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for point clouds used by the
//!   benchmarks, the example, and the hull property tests.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of points to draw.
    pub count: usize,
    /// Points are drawn uniformly from `[-half_extent, half_extent]^2`.
    pub half_extent: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            half_extent: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a deterministic random point cloud. Coordinates are always finite.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r = cfg.half_extent.abs().max(f64::MIN_POSITIVE);
    (0..cfg.count)
        .map(|_| Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r)))
        .collect()
}
