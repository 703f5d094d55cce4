//! Fixed numeric defaults.
//!
//! Policy
//! - Defaults are constants so that every stage of the pipeline agrees on the
//!   same tolerance. Per-call knobs live in `SortCfg` and `SynthCfg`.

/// Orientation tolerance: `|cross| < EPS` counts as collinear.
pub const EPS: f64 = 1e-6;
/// Worker count used when the caller does not ask for more.
pub const DEFAULT_THREADS: usize = 1;
/// Point-set sizes exercised by the cli benchmark mode.
pub const BENCH_SIZES: [usize; 3] = [100, 1000, 10000];
/// Side length of the square synthetic points are drawn from.
pub const SYNTH_EXTENT: f64 = 100.0;
