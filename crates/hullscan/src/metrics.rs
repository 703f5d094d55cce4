//! Scalar reductions over a finished hull: shoelace area and perimeter.
//! Both read vertices in order and wrap last → first; z is ignored by `area`.

use crate::error::{HullError, Result};
use crate::geometry::distance;
use crate::types::Point;

/// Polygon area by the shoelace formula. Needs at least 3 vertices.
pub fn area(hull: &[Point]) -> Result<f64> {
    if hull.len() < 3 {
        return Err(HullError::too_few("area", 3, hull.len()));
    }
    let twice: f64 = cyclic_pairs(hull)
        .map(|(p, q)| p.x * q.y - q.x * p.y)
        .sum();
    Ok(twice.abs() / 2.0)
}

/// Closed path length through the vertices. Needs at least 2 vertices.
pub fn perimeter(hull: &[Point]) -> Result<f64> {
    if hull.len() < 2 {
        return Err(HullError::too_few("perimeter", 2, hull.len()));
    }
    Ok(cyclic_pairs(hull).map(|(p, q)| distance(p, q)).sum())
}

#[inline]
fn cyclic_pairs(pts: &[Point]) -> impl Iterator<Item = (&Point, &Point)> {
    pts.iter().zip(pts.iter().cycle().skip(1))
}

/// Area and perimeter of one hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullMetrics {
    pub area: f64,
    pub perimeter: f64,
}

impl HullMetrics {
    pub fn of(hull: &[Point]) -> Result<Self> {
        Ok(Self {
            area: area(hull)?,
            perimeter: perimeter(hull)?,
        })
    }
}
