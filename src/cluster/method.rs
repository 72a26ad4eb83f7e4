use serde::{Deserialize, Serialize};

/// Identifies a clustering method and what its results carry.
///
/// The pipeline treats `id` as opaque. Only the capability flags decide
/// whether covariances become confidence regions and whether weights reach
/// the statistics, so a new covariance-bearing method needs nothing more than
/// a descriptor with `covariance: true`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Identifier sent to the clustering service, e.g. `"em"`.
    pub id: String,
    /// Results carry one covariance matrix per cluster.
    #[serde(default)]
    pub covariance: bool,
    /// Results carry one mixture weight per cluster.
    #[serde(default)]
    pub weights: bool,
}

impl MethodDescriptor {
    /// A method with no capabilities.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            covariance: false,
            weights: false,
        }
    }

    /// Declare covariance support.
    pub fn with_covariance(mut self, covariance: bool) -> Self {
        self.covariance = covariance;
        self
    }

    /// Declare weight support.
    pub fn with_weights(mut self, weights: bool) -> Self {
        self.weights = weights;
        self
    }

    /// Lloyd's k-means: labels and centroids only.
    pub fn kmeans() -> Self {
        Self::new("kmeans")
    }

    /// Gaussian mixture fitted by expectation-maximization.
    pub fn em() -> Self {
        Self::new("em").with_covariance(true).with_weights(true)
    }

    /// Ward-linkage agglomerative clustering; no centroids on the wire.
    pub fn hierarchical() -> Self {
        Self::new("hierarchical")
    }

    /// Plot title for results of this method.
    pub fn title(&self) -> String {
        format!("{} Clustering Results", self.id.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let em = MethodDescriptor::em();
        assert!(em.covariance && em.weights);

        let km = MethodDescriptor::kmeans();
        assert!(!km.covariance && !km.weights);

        assert_eq!(MethodDescriptor::hierarchical().id, "hierarchical");
    }

    #[test]
    fn title_upper_cases_the_id() {
        assert_eq!(MethodDescriptor::em().title(), "EM Clustering Results");
        assert_eq!(MethodDescriptor::kmeans().title(), "KMEANS Clustering Results");
    }

    #[test]
    fn capabilities_default_to_off_on_the_wire() {
        let m: MethodDescriptor = serde_json::from_str(r#"{"id": "gmm-diag", "covariance": true}"#).unwrap();
        assert_eq!(m, MethodDescriptor::new("gmm-diag").with_covariance(true));
    }
}
