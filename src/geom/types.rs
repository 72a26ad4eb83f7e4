use serde::{Deserialize, Serialize};

/// A point in the plane.
///
/// Serialized as a two-element array `[x, y]`, which is how the clustering
/// service ships points and centroids.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the point treated as a vector.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Dot product with another point treated as a vector.
    #[inline]
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// A 2×2 matrix stored row-major as `[[a, b], [c, d]]`.
///
/// Covariance matrices are expected to be symmetric (`b ≈ c`), but the type
/// does not enforce it; see [`Matrix2::is_symmetric`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix2(pub [[f64; 2]; 2]);

impl Matrix2 {
    /// Build from the four entries `[[a, b], [c, d]]`.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self([[a, b], [c, d]])
    }

    /// Build a symmetric matrix `[[a, b], [b, d]]`.
    pub const fn symmetric(a: f64, b: f64, d: f64) -> Self {
        Self::new(a, b, b, d)
    }

    /// Diagonal matrix `[[a, 0], [0, d]]`.
    pub const fn diagonal(a: f64, d: f64) -> Self {
        Self::new(a, 0.0, 0.0, d)
    }

    /// Entries as `(a, b, c, d)`.
    #[inline]
    pub fn entries(&self) -> (f64, f64, f64, f64) {
        let [[a, b], [c, d]] = self.0;
        (a, b, c, d)
    }

    #[inline]
    pub fn trace(&self) -> f64 {
        self.0[0][0] + self.0[1][1]
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        let (a, b, c, d) = self.entries();
        a * d - b * c
    }

    /// Whether the off-diagonal entries agree within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (self.0[0][1] - self.0[1][0]).abs() <= tol
    }

    /// Whether every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_wire_form_is_an_array() {
        let p = Point::new(1.5, -2.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1.5,-2.0]");
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn matrix_wire_form_is_nested_rows() {
        let m: Matrix2 = serde_json::from_str("[[4.0, 1.0], [1.0, 3.0]]").unwrap();
        assert_eq!(m, Matrix2::symmetric(4.0, 1.0, 3.0));
        assert_eq!(m.trace(), 7.0);
        assert_eq!(m.determinant(), 11.0);
    }

    #[test]
    fn symmetry_check_uses_tolerance() {
        assert!(Matrix2::new(1.0, 0.5, 0.5 + 1e-12, 2.0).is_symmetric(1e-10));
        assert!(!Matrix2::new(1.0, 0.5, 0.6, 2.0).is_symmetric(1e-10));
    }
}
