//! Graham-scan convex hull over an angle-sorted point sequence.
//!
//! Contract
//! - Input is borrowed; the scan runs on a private working copy.
//! - Output is a fresh `PointSet` in counterclockwise order starting at the
//!   pivot, carrying the input's `Dim`.
//! - A zero cross product counts as a non-left turn, so collinear boundary
//!   points are dropped and only extreme vertices remain.
//!
//! References
//! - Code cross-refs: `sort::angular_sort`, `geometry::cross_product`

use crate::error::{HullError, Result};
use crate::geometry::cross_product;
use crate::sort::{angular_sort, SortCfg};
use crate::types::{Point, PointSet};

/// Sweeps a pivot-first, angle-sorted slice and returns the hull vertices.
///
/// Every point after the pivot goes through the same rule: pop the top while
/// the stack holds at least two points and (second-to-top, top, candidate)
/// is not a strict left turn, then push. The pivot is never popped.
/// Slices of length ≤ 2 come back unchanged.
pub fn graham_scan(sorted: &[Point]) -> Result<Vec<Point>> {
    let mut stack: Vec<Point> = Vec::new();
    stack.try_reserve_exact(sorted.len())?;
    for p in sorted {
        while let [.., a, b] = stack.as_slice() {
            if cross_product(a, b, p) > 0.0 {
                break;
            }
            stack.pop();
        }
        stack.push(*p);
    }
    stack.shrink_to_fit();
    Ok(stack)
}

/// Convex hull of `set` using `threads` workers for the warm-start sort.
pub fn compute_hull(set: &PointSet, threads: usize) -> Result<PointSet> {
    compute_hull_with(set, SortCfg::with_threads(threads))
}

/// Convex hull of `set` with an explicit sorter configuration.
///
/// Errors
/// - `InvalidInput` for fewer than 3 points, or any NaN/infinite coordinate.
/// - `Allocation` if the working copy or output cannot be reserved.
pub fn compute_hull_with(set: &PointSet, cfg: SortCfg) -> Result<PointSet> {
    if set.len() < 3 {
        return Err(HullError::too_few("convex hull", 3, set.len()));
    }
    if let Some(i) = set.points().iter().position(|p| !p.is_finite()) {
        return Err(HullError::invalid(format!(
            "point {i} has a non-finite coordinate"
        )));
    }
    let mut work: Vec<Point> = Vec::new();
    work.try_reserve_exact(set.len())?;
    work.extend_from_slice(set.points());

    angular_sort(&mut work, cfg);
    let hull = graham_scan(&work)?;
    tracing::debug!(
        input = set.len(),
        hull = hull.len(),
        threads = cfg.threads,
        "compute_hull"
    );
    Ok(PointSet::with_dim(hull, set.dim()))
}
