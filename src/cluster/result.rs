use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geom::{Matrix2, Point};

/// Output of the external clustering service.
///
/// Mirrors the service's JSON body: `labels` and, depending on the method,
/// `centroids`, `covariances` and `weights`. Fields the pipeline does not use
/// (such as a hierarchical linkage matrix) are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusteringResult {
    /// One label per point. Signed so that a negative label can be reported
    /// as inconsistent instead of failing to decode.
    pub labels: Vec<i64>,
    /// One centroid per cluster.
    #[serde(default)]
    pub centroids: Vec<Point>,
    /// One covariance matrix per cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub covariances: Option<Vec<Matrix2>>,
    /// One mixture weight per cluster, expected to sum to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
}

impl ClusteringResult {
    /// A result with labels and centroids only.
    pub fn new(labels: Vec<i64>, centroids: Vec<Point>) -> Self {
        Self {
            labels,
            centroids,
            covariances: None,
            weights: None,
        }
    }

    /// Attach per-cluster covariances.
    pub fn with_covariances(mut self, covariances: Vec<Matrix2>) -> Self {
        self.covariances = Some(covariances);
        self
    }

    /// Attach per-cluster weights.
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Decode the service's JSON body.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Decode`] if the body is not a valid result.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Covariance of cluster `index`, if present.
    pub fn covariance(&self, index: usize) -> Option<&Matrix2> {
        self.covariances.as_ref().and_then(|c| c.get(index))
    }
}
