//! 2D convex hulls via a parallel-sort Graham scan, plus hull metrics.
//!
//! Pipeline
//! - Pick the pivot (lowest y, then lowest x) and move it to the front.
//! - Sort the remaining points by polar angle around the pivot: contiguous
//!   chunks are sorted on scoped threads, then one full sort fixes the global
//!   order.
//! - Sweep the sorted sequence, popping every non-left turn.
//! - Reduce the hull to its area (shoelace) and perimeter.
//!
//! z coordinates are carried through but never enter orientation or area math.
//!
//! API Policy
//! - The `prelude` is the intended import surface for the cli and benches.
//! - Everything fallible returns `Result<_, HullError>`; there are no sentinels.

pub mod cfg;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod metrics;
pub mod sort;
pub mod synth;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, Result};
pub use types::{Dim, Point, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{BENCH_SIZES, DEFAULT_THREADS, EPS};
    pub use crate::error::{HullError, Result};
    pub use crate::geometry::{cross_product, distance, is_collinear};
    pub use crate::hull::{compute_hull, compute_hull_with, graham_scan};
    pub use crate::metrics::{area, perimeter, HullMetrics};
    pub use crate::sort::{angular_sort, chunk_ranges, select_pivot, PolarOrder, SortCfg};
    pub use crate::synth::{generate as generate_synthetic, SynthCfg};
    pub use crate::types::{Dim, Point, PointSet};
}
