use super::method::MethodDescriptor;
use super::result::ClusteringResult;
use crate::error::Result;
use crate::geom::Point;

/// Source of the points to cluster (typically an HTTP endpoint).
pub trait DataFetch {
    /// Fetch the full, ordered point set.
    fn fetch(&self) -> Result<Vec<Point>>;
}

/// Remote clustering service.
pub trait ClusterCompute {
    /// Cluster `points` with `method` into `n_clusters` groups.
    ///
    /// Implementations report transport or service failures as
    /// [`crate::Error::Collaborator`].
    fn compute(
        &self,
        points: &[Point],
        method: &MethodDescriptor,
        n_clusters: usize,
    ) -> Result<ClusteringResult>;
}
