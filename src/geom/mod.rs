//! Planar geometry derived from cluster covariances.
//!
//! ## Eigendecomposition
//!
//! A 2×2 covariance has a closed-form eigendecomposition, so no iterative
//! solver is needed. [`solve_symmetric`] returns the eigenvalues largest
//! first together with unit eigenvectors, or [`crate::Error::DegenerateMatrix`]
//! when the input is not real-symmetric within tolerance.
//!
//! ## Confidence regions
//!
//! [`EllipseGenerator`] turns an [`EigenPair`] into a closed polygon whose
//! semi-axes are `scale·√λ`. Components with a zero eigenvalue have no region;
//! that is reported as `None`, never as an error.
//!
//! ## Usage
//!
//! ```rust
//! use clusterviz::geom::{solve_symmetric, EllipseGenerator, Matrix2, Point};
//!
//! let cov = Matrix2::diagonal(4.0, 1.0);
//! let pair = solve_symmetric(&cov).unwrap();
//! assert_eq!(pair.values, [4.0, 1.0]);
//!
//! let ellipse = EllipseGenerator::new()
//!     .generate(Point::new(0.0, 0.0), &pair)
//!     .unwrap()
//!     .expect("non-degenerate covariance");
//! assert_eq!(ellipse.outline.len(), 101);
//! ```

mod eigen;
mod ellipse;
mod types;

pub use eigen::{solve_symmetric, EigenPair, EPSILON};
pub use ellipse::{ConfidenceEllipse, ConfidenceLevel, EllipseGenerator, DEFAULT_SAMPLES};
pub use types::{Matrix2, Point};
