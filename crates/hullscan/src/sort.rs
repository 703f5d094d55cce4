//! Polar-angle sort around the pivot, with an optional parallel warm start.
//!
//! Phases
//! - Pivot: lowest y, ties by lowest x, swapped to index 0.
//! - Warm start: the non-pivot points are cut into `threads` contiguous chunks
//!   and each chunk is sorted on its own scoped thread. Chunks are disjoint
//!   `&mut` sub-slices, so no locking is needed; the scope joins every worker.
//! - Full sort: one single-threaded sort of the whole non-pivot range with the
//!   same comparator. Chunk-local order does not concatenate into global order,
//!   so this pass alone determines the output; the warm start only changes
//!   how much work it has left.
//!
//! The pivot is captured in `PolarOrder`, never stored globally, so concurrent
//! sorts on independent inputs do not interact.

use std::cmp::Ordering;
use std::ops::Range;

use crate::cfg::DEFAULT_THREADS;
use crate::types::Point;

/// Sorter configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortCfg {
    /// Worker count for the warm start. 0 is treated as 1.
    pub threads: usize,
    /// Run the chunked parallel phase before the full sort.
    pub warm_start: bool,
}

impl Default for SortCfg {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            warm_start: true,
        }
    }
}

impl SortCfg {
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads,
            ..Self::default()
        }
    }
}

/// Comparator ordering points by polar angle around a fixed pivot.
///
/// Each point maps to the key `(angle, radius, x, y, z)` where `angle` is
/// `atan2(dy, dx)` and `radius` the planar distance from the pivot; keys
/// compare field by field with `f64::total_cmp`.
/// - Counterclockwise-first: smaller angle first.
/// - Same ray: nearer to the pivot first. Pivot duplicates have angle and
///   radius 0 and lead the order.
/// - Only identical points compare `Equal`, so the result does not depend on
///   the order the points arrived in.
///
/// A key order is a total order for any input; there is no tolerance band.
/// `EPS` belongs to `is_collinear`, not here.
///
/// Pre: every point lies in the closed upper half-plane of the pivot, which
/// holds for the pivot chosen by `select_pivot`. Coordinates are finite.
#[derive(Clone, Copy, Debug)]
pub struct PolarOrder {
    pivot: Point,
}

impl PolarOrder {
    #[inline]
    pub fn new(pivot: Point) -> Self {
        Self { pivot }
    }
    #[inline]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Sort key of `p`: angle, planar radius, then raw coordinates.
    #[inline]
    pub fn key(&self, p: &Point) -> [f64; 5] {
        let dx = p.x - self.pivot.x;
        let dy = p.y - self.pivot.y;
        [dy.atan2(dx), dx.hypot(dy), p.x, p.y, p.z]
    }

    pub fn compare(&self, p: &Point, q: &Point) -> Ordering {
        let (kp, kq) = (self.key(p), self.key(q));
        kp.iter()
            .zip(&kq)
            .map(|(a, b)| a.total_cmp(b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Index of the lowest point (minimum y, then minimum x). First one wins on
/// exact duplicates. `None` for an empty slice.
pub fn select_pivot(points: &[Point]) -> Option<usize> {
    let mut best: Option<(usize, &Point)> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            Some((_, b)) if !(p.y < b.y || (p.y == b.y && p.x < b.x)) => {}
            _ => best = Some((i, p)),
        }
    }
    best.map(|(i, _)| i)
}

/// Splits `len` items into `threads` contiguous near-equal ranges.
///
/// Each range has `len / threads` items; the first `len % threads` ranges get
/// one extra. Empty ranges (more threads than items) are dropped.
pub fn chunk_ranges(len: usize, threads: usize) -> Vec<Range<usize>> {
    let t = threads.max(1);
    let base = len / t;
    let extra = len % t;
    let mut out = Vec::with_capacity(t.min(len));
    let mut start = 0;
    for i in 0..t {
        let end = start + base + usize::from(i < extra);
        if start < end {
            out.push(start..end);
        }
        start = end;
    }
    out
}

/// Sorts each range of `rest` concurrently, one scoped thread per range.
fn sort_chunks_parallel(rest: &mut [Point], ranges: &[Range<usize>], order: &PolarOrder) {
    std::thread::scope(|s| {
        let mut tail = rest;
        for r in ranges {
            let (head, next) = std::mem::take(&mut tail).split_at_mut(r.len());
            tail = next;
            s.spawn(move || head.sort_by(|p, q| order.compare(p, q)));
        }
    });
}

/// Moves the pivot to index 0 and sorts the rest by polar angle around it.
///
/// Returns the comparator used, or `None` for an empty slice.
/// Post: `points[0]` is the pivot; `points[1..]` is non-decreasing under the
/// returned `PolarOrder`, identically for every `cfg.threads`.
pub fn angular_sort(points: &mut [Point], cfg: SortCfg) -> Option<PolarOrder> {
    let pivot_idx = select_pivot(points)?;
    points.swap(0, pivot_idx);
    let order = PolarOrder::new(points[0]);
    let rest = &mut points[1..];

    let ranges = chunk_ranges(rest.len(), cfg.threads);
    tracing::debug!(
        pivot_idx,
        chunks = ranges.len(),
        warm_start = cfg.warm_start,
        "angular_sort"
    );
    if cfg.warm_start && ranges.len() > 1 {
        sort_chunks_parallel(rest, &ranges, &order);
    }
    rest.sort_by(|p, q| order.compare(p, q));
    Some(order)
}
