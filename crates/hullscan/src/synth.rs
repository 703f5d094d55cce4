//! Synthetic point clouds for benchmarks.
//!
//! Points are uniform in the square `[0, extent)²`; 3D sets also draw z from
//! `[0, extent)`. Draws are reproducible: the seed goes through SplitMix64
//! mixing before seeding `StdRng`, so nearby seeds give unrelated streams.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::SYNTH_EXTENT;
use crate::types::{Dim, Point, PointSet};

/// Synthetic cloud configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthCfg {
    pub count: usize,
    pub dim: Dim,
    /// Side length of the sampling square. Non-positive values fall back to
    /// `SYNTH_EXTENT`.
    pub extent: f64,
}

impl Default for SynthCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            dim: Dim::Two,
            extent: SYNTH_EXTENT,
        }
    }
}

impl SynthCfg {
    pub fn sized(count: usize, dim: Dim) -> Self {
        Self {
            count,
            dim,
            ..Self::default()
        }
    }
}

fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e3779b97f4a7c15);
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// Draws `cfg.count` points; the set carries `cfg.dim` as its flag.
pub fn generate(cfg: SynthCfg, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(mix(seed));
    let extent = if cfg.extent > 0.0 {
        cfg.extent
    } else {
        SYNTH_EXTENT
    };
    let points = (0..cfg.count)
        .map(|_| {
            let x = rng.gen::<f64>() * extent;
            let y = rng.gen::<f64>() * extent;
            let z = match cfg.dim {
                Dim::Three => rng.gen::<f64>() * extent,
                Dim::Two => 0.0,
            };
            Point::new(x, y, z)
        })
        .collect();
    PointSet::with_dim(points, cfg.dim)
}
