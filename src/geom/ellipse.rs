//! Confidence ellipses of bivariate normal components.
//!
//! A cluster with mean `μ` and covariance `Σ = V diag(λ1, λ2) Vᵀ` has
//! probability contours that are ellipses centred on `μ`, with semi-axes along
//! the eigenvectors and lengths `s·√λ`. The scale `s` is the square root of
//! the χ² quantile with 2 degrees of freedom, so `s = 2.447` bounds 95% of the
//! mass.

use std::f64::consts::TAU;

use log::debug;
use serde::{Deserialize, Serialize};

use super::eigen::{self, EigenPair, EPSILON};
use super::types::{Matrix2, Point};
use crate::error::{Error, Result};

/// Default number of segments in a sampled ellipse.
pub const DEFAULT_SAMPLES: usize = 100;

/// Probability mass enclosed by a confidence region.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// 90% (scale 2.146).
    P90,
    /// 95% (scale 2.447).
    #[default]
    P95,
    /// 99% (scale 3.035).
    P99,
    /// Arbitrary scale factor applied to `√λ`.
    Scale(f64),
}

impl ConfidenceLevel {
    /// Scale factor applied to the square roots of the eigenvalues.
    pub fn scale(&self) -> f64 {
        match self {
            Self::P90 => 2.146,
            Self::P95 => 2.447,
            Self::P99 => 3.035,
            Self::Scale(s) => *s,
        }
    }
}

/// A sampled confidence ellipse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceEllipse {
    pub center: Point,
    pub semi_major: f64,
    pub semi_minor: f64,
    /// Rotation of the major axis from the x axis, in radians.
    pub angle: f64,
    /// Closed outline: the last point equals the first.
    pub outline: Vec<Point>,
}

/// Generates confidence-region polygons from eigen-pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseGenerator {
    confidence: ConfidenceLevel,
    samples: usize,
}

impl EllipseGenerator {
    /// Create a generator with the 95% level and [`DEFAULT_SAMPLES`] segments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence level.
    pub fn with_confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set the number of segments (`N`); the outline has `N + 1` points.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn confidence(&self) -> ConfidenceLevel {
        self.confidence
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    fn validate(&self) -> Result<f64> {
        let scale = self.confidence.scale();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "confidence",
                message: "scale must be positive and finite",
            });
        }
        if self.samples < 3 {
            return Err(Error::InvalidParameter {
                name: "samples",
                message: "must be at least 3",
            });
        }
        Ok(scale)
    }

    /// Sample the ellipse for `eigen` centred on `center`.
    ///
    /// Returns `Ok(None)` when either eigenvalue is at or below [`EPSILON`]:
    /// a flat or empty component has no region, which is not an error.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for a bad scale or sample count.
    pub fn generate(&self, center: Point, eigen: &EigenPair) -> Result<Option<ConfidenceEllipse>> {
        let scale = self.validate()?;

        let (major, direction) = eigen.major();
        let (minor, _) = eigen.minor();
        if major <= EPSILON || minor <= EPSILON {
            return Ok(None);
        }

        let a = major.sqrt() * scale;
        let b = minor.sqrt() * scale;
        let angle = direction.y.atan2(direction.x);
        let (sin_a, cos_a) = angle.sin_cos();

        let n = self.samples;
        let mut outline: Vec<Point> = (0..=n)
            .map(|i| {
                let t = TAU * (i as f64) / (n as f64);
                let px = a * t.cos();
                let py = b * t.sin();
                Point::new(
                    center.x + px * cos_a - py * sin_a,
                    center.y + px * sin_a + py * cos_a,
                )
            })
            .collect();
        // cos(2π) is not exactly 1; pin the seam.
        outline[n] = outline[0];

        Ok(Some(ConfidenceEllipse {
            center,
            semi_major: a,
            semi_minor: b,
            angle,
            outline,
        }))
    }

    /// Eigendecompose `covariance` and sample its ellipse around `center`.
    ///
    /// A degenerate covariance is logged and treated as "no region" so that
    /// the remaining clusters keep rendering.
    ///
    /// # Errors
    ///
    /// Only parameter errors from [`EllipseGenerator::generate`].
    pub fn confidence_region(
        &self,
        center: Point,
        covariance: &Matrix2,
    ) -> Result<Option<ConfidenceEllipse>> {
        match eigen::solve_symmetric(covariance) {
            Ok(pair) => self.generate(center, &pair),
            Err(Error::DegenerateMatrix { reason }) => {
                debug!("confidence region omitted: {reason} ({covariance:?})");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for EllipseGenerator {
    fn default() -> Self {
        Self {
            confidence: ConfidenceLevel::P95,
            samples: DEFAULT_SAMPLES,
        }
    }
}
