use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom::Point;

/// Per-cluster statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterStats {
    /// Cluster index (the label value).
    pub index: usize,
    /// Indices of member points, in input order.
    pub members: Vec<usize>,
    /// Number of members.
    pub size: usize,
    /// Share of all points, in percent. Not rounded.
    pub percentage: f64,
    /// Mixture weight as reported by the clustering service.
    pub weight: Option<f64>,
}

impl ClusterStats {
    /// Member coordinates, in input order.
    ///
    /// # Panics
    ///
    /// If `points` is not the slice this cluster was aggregated from (a member
    /// index is out of bounds).
    pub fn points<'a>(&'a self, points: &'a [Point]) -> impl Iterator<Item = Point> + 'a {
        self.members.iter().map(move |&i| points[i])
    }
}

/// Points grouped by label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Aggregation {
    /// Total number of points.
    pub total: usize,
    /// One entry per cluster, ordered by index.
    pub clusters: Vec<ClusterStats>,
}

impl Aggregation {
    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether any cluster carries a weight.
    pub fn has_weights(&self) -> bool {
        self.clusters.iter().any(|c| c.weight.is_some())
    }
}

/// Group `points` by `labels`.
///
/// The number of clusters is `max(labels) + 1`. `weights`, when given, are
/// zipped onto clusters by index as-is; a missing entry leaves `weight` unset.
///
/// # Errors
///
/// [`Error::InconsistentLabeling`] if `labels` and `points` differ in length,
/// a label is negative or not below the point count, or some index below the
/// largest label has no members.
pub fn aggregate(points: &[Point], labels: &[i64], weights: Option<&[f64]>) -> Result<Aggregation> {
    if labels.len() != points.len() {
        return Err(Error::InconsistentLabeling {
            reason: format!("{} labels for {} points", labels.len(), points.len()),
        });
    }

    let total = points.len();
    if total == 0 {
        return Ok(Aggregation::default());
    }

    let mut indices: Vec<usize> = Vec::with_capacity(total);
    for (i, &label) in labels.iter().enumerate() {
        let index = usize::try_from(label).map_err(|_| Error::InconsistentLabeling {
            reason: format!("point {i} has negative label {label}"),
        })?;
        indices.push(index);
    }

    // Dense labels never exceed the point count; check before sizing buckets.
    let max = indices.iter().copied().max().unwrap_or(0);
    if max >= total {
        return Err(Error::InconsistentLabeling {
            reason: format!("label {max} out of range for {total} points"),
        });
    }
    let num_clusters = max + 1;
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); num_clusters];
    for (i, &index) in indices.iter().enumerate() {
        members[index].push(i);
    }

    if let Some(empty) = members.iter().position(Vec::is_empty) {
        return Err(Error::InconsistentLabeling {
            reason: format!("cluster {empty} of {num_clusters} has no points"),
        });
    }

    let clusters: Vec<ClusterStats> = members
        .into_iter()
        .enumerate()
        .map(|(index, members)| {
            let size = members.len();
            ClusterStats {
                index,
                size,
                // Multiply first so whole percentages come out exact.
                percentage: (size as f64 * 100.0) / total as f64,
                weight: weights.and_then(|w| w.get(index).copied()),
                members,
            }
        })
        .collect();

    trace!("aggregated {total} points into {num_clusters} clusters");
    Ok(Aggregation { total, clusters })
}
