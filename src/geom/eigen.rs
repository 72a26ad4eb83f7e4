//! Closed-form eigendecomposition of symmetric 2×2 matrices.
//!
//! For `M = [[a, b], [c, d]]` the characteristic polynomial is
//!
//! ```text
//! λ² - tr(M) λ + det(M) = 0,   λ = (tr ± √(tr² - 4 det)) / 2
//! ```
//!
//! The discriminant `tr² - 4 det` is evaluated as `(a - d)² + 4bc`. For a real
//! symmetric matrix that is `(a - d)² + 4b²` and never negative; a value below
//! `-EPSILON` means the input was not symmetric (or not finite) and is reported
//! as [`Error::DegenerateMatrix`].

use serde::{Deserialize, Serialize};

use super::types::{Matrix2, Point};
use crate::error::{Error, Result};

/// Tolerance for every zero comparison in the solver.
pub const EPSILON: f64 = 1e-10;

/// Eigenvalues of a 2×2 matrix with their unit eigenvectors.
///
/// `values[0] >= values[1]`, and `vectors[i]` belongs to `values[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenPair {
    /// Eigenvalues, larger first.
    pub values: [f64; 2],
    /// Unit eigenvectors matching `values`.
    pub vectors: [Point; 2],
}

impl EigenPair {
    /// The larger eigenvalue and its eigenvector.
    pub fn major(&self) -> (f64, Point) {
        (self.values[0], self.vectors[0])
    }

    /// The smaller eigenvalue and its eigenvector.
    pub fn minor(&self) -> (f64, Point) {
        (self.values[1], self.vectors[1])
    }
}

/// Eigendecompose a symmetric 2×2 matrix.
///
/// # Errors
///
/// [`Error::DegenerateMatrix`] if an entry is not finite, the discriminant is
/// negative beyond tolerance, or an eigenvector has (near) zero length.
pub fn solve_symmetric(m: &Matrix2) -> Result<EigenPair> {
    if !m.is_finite() {
        return Err(Error::DegenerateMatrix {
            reason: "matrix has non-finite entries",
        });
    }

    let (a, b, c, d) = m.entries();
    let trace = a + d;
    // Same value as `tr² - 4 det`, without cancelling the off-diagonal term
    // when `a ≈ d`.
    let discriminant = (a - d) * (a - d) + 4.0 * b * c;
    if discriminant < -EPSILON {
        return Err(Error::DegenerateMatrix {
            reason: "negative discriminant, matrix is not real-symmetric",
        });
    }
    let root = discriminant.max(0.0).sqrt();
    let lambda1 = (trace + root) / 2.0;
    let lambda2 = (trace - root) / 2.0;

    if b.abs() < EPSILON && c.abs() < EPSILON {
        // Diagonal: `a` goes with e_x, `d` with e_y; keep the larger one first.
        let ex = Point::new(1.0, 0.0);
        let ey = Point::new(0.0, 1.0);
        let pair = if a >= d {
            EigenPair {
                values: [a, d],
                vectors: [ex, ey],
            }
        } else {
            EigenPair {
                values: [d, a],
                vectors: [ey, ex],
            }
        };
        return Ok(pair);
    }

    // Branch on which row of (M - λ1 I) is better conditioned. Taking the
    // vector from the row whose diagonal term is far from λ1 avoids building
    // it out of two near-zero components.
    let (v1, v2) = if (a - lambda1).abs() > (d - lambda1).abs() {
        (Point::new(b, lambda1 - a), Point::new(b, lambda2 - a))
    } else {
        (Point::new(lambda1 - d, c), Point::new(lambda2 - d, c))
    };

    Ok(EigenPair {
        values: [lambda1, lambda2],
        vectors: [normalize(v1)?, normalize(v2)?],
    })
}

fn normalize(v: Point) -> Result<Point> {
    let norm = v.norm();
    if norm < EPSILON {
        return Err(Error::DegenerateMatrix {
            reason: "eigenvector has zero length",
        });
    }
    Ok(Point::new(v.x / norm, v.y / norm))
}
