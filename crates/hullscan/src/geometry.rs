use crate::cfg::EPS;
use crate::types::Point;

/// Euclidean distance over all three coordinates (z = 0 adds nothing).
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (a.coords() - b.coords()).norm()
}

/// Twice the signed area of triangle (o, a, b) in the xy-plane.
/// Positive when `b` lies counterclockwise from `a` around `o`.
#[inline]
pub fn cross_product(o: &Point, a: &Point, b: &Point) -> f64 {
    let oa = a.xy() - o.xy();
    let ob = b.xy() - o.xy();
    oa.x * ob.y - oa.y * ob.x
}

#[inline]
pub fn is_collinear(a: &Point, b: &Point, c: &Point) -> bool {
    cross_product(a, b, c).abs() < EPS
}
