//! Point and point-set types.
//!
//! - `Point`: plain `x, y, z` triple; z rides along for I/O only.
//! - `Dim`: whether a set carries meaningful z values.
//! - `PointSet`: owned, ordered points plus their `Dim` flag.

use nalgebra::{Vector2, Vector3};

/// A point in R³ whose hull math only reads `x` and `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
    #[inline]
    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
    /// Projection onto the xy-plane.
    #[inline]
    pub fn xy(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    #[inline]
    pub fn coords(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
    /// No NaN or infinite coordinate.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self::planar(v.x, v.y)
    }
}

impl From<Vector3<f64>> for Point {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Dimensionality flag of a point set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dim {
    #[default]
    Two,
    Three,
}

impl Dim {
    /// `Three` iff some point has a nonzero z.
    pub fn detect(points: &[Point]) -> Self {
        if points.iter().any(|p| p.z != 0.0) {
            Dim::Three
        } else {
            Dim::Two
        }
    }
}

/// Ordered, owned sequence of points with a dimensionality flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
    dim: Dim,
}

impl PointSet {
    /// Wraps `points`, detecting the flag from the data.
    pub fn new(points: Vec<Point>) -> Self {
        let dim = Dim::detect(&points);
        Self { points, dim }
    }

    pub fn with_dim(points: Vec<Point>, dim: Dim) -> Self {
        Self { points, dim }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn dim(&self) -> Dim {
        self.dim
    }
    #[inline]
    pub fn is_3d(&self) -> bool {
        self.dim == Dim::Three
    }
    /// Overrides the flag (e.g. a forced `--dim`); coordinates are untouched.
    pub fn set_dim(&mut self, dim: Dim) {
        self.dim = dim;
    }
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
