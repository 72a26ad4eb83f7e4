use log::debug;
use serde::{Deserialize, Serialize};

use super::color;
use super::series::{Color, Dash, Geometry, LineStyle, Marker, MarkerSymbol, Series, SeriesRole, Style};
use crate::cluster::{aggregate, Aggregation, ClusteringResult, MethodDescriptor};
use crate::error::Result;
use crate::geom::{ConfidenceEllipse, ConfidenceLevel, EllipseGenerator, Point, DEFAULT_SAMPLES};

const POINT_SIZE: f64 = 8.0;
const CENTROID_SIZE: f64 = 12.0;
const STROKE_WIDTH: f64 = 2.0;

/// Display toggles and ellipse parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Draw a centroid marker series when the result has centroids.
    pub show_centroids: bool,
    /// Draw confidence regions for covariance-bearing methods.
    pub show_confidence_regions: bool,
    /// Probability mass enclosed by each region.
    pub confidence: ConfidenceLevel,
    /// Segments per region outline.
    pub samples: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_centroids: true,
            show_confidence_regions: true,
            confidence: ConfidenceLevel::P95,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Turns points, statistics and ellipses into an ordered series list.
///
/// The projector is stateless beyond its options: the same inputs always
/// produce the same list, in the same order.
#[derive(Debug, Clone, Default)]
pub struct RenderProjector {
    options: RenderOptions,
    ellipses: EllipseGenerator,
}

impl RenderProjector {
    pub fn new(options: RenderOptions) -> Self {
        let ellipses = EllipseGenerator::new()
            .with_confidence(options.confidence)
            .with_samples(options.samples);
        Self { options, ellipses }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Unclustered points as a single grey series. Empty input gives no series.
    pub fn project_points(&self, points: &[Point]) -> Vec<Series> {
        if points.is_empty() {
            return Vec::new();
        }
        vec![Series {
            role: SeriesRole::DataPoints,
            cluster: None,
            label: "Data Points".to_string(),
            geometry: Geometry::Points(points.to_vec()),
            style: Style {
                color: Color::MUTED,
                marker: Some(marker(MarkerSymbol::Circle, POINT_SIZE, None)),
                line: None,
            },
        }]
    }

    /// Project already aggregated clusters.
    ///
    /// `aggregation` must have been built from `points` (as
    /// [`aggregate`](crate::cluster::aggregate) does); member indices are looked
    /// up in that slice. `centroids` may be empty; `regions[i]` is the region of
    /// cluster `i`, and missing or `None` entries are skipped.
    ///
    /// # Panics
    ///
    /// If a member index of `aggregation` is out of bounds for `points`.
    pub fn project(
        &self,
        points: &[Point],
        aggregation: &Aggregation,
        centroids: &[Point],
        regions: &[Option<ConfidenceEllipse>],
    ) -> Vec<Series> {
        if aggregation.is_empty() {
            return Vec::new();
        }
        let n = aggregation.num_clusters();
        let mut series = Vec::with_capacity(2 * n + 1);

        for stats in &aggregation.clusters {
            series.push(Series {
                role: SeriesRole::ClusterMembers,
                cluster: Some(stats.index),
                label: format!("Cluster {}", stats.index + 1),
                geometry: Geometry::Points(stats.points(points).collect()),
                style: Style {
                    color: color::color(stats.index, n).into(),
                    marker: Some(marker(MarkerSymbol::Circle, POINT_SIZE, None)),
                    line: None,
                },
            });
        }

        if !centroids.is_empty() {
            series.push(Series {
                role: SeriesRole::Centroids,
                cluster: None,
                label: "Centroids".to_string(),
                geometry: Geometry::Points(centroids.to_vec()),
                style: Style {
                    color: Color::BLACK,
                    marker: Some(marker(MarkerSymbol::Cross, CENTROID_SIZE, Some(STROKE_WIDTH))),
                    line: None,
                },
            });
        }

        for (index, region) in regions.iter().enumerate().take(n) {
            let Some(region) = region else { continue };
            series.push(Series {
                role: SeriesRole::ConfidenceRegion,
                cluster: Some(index),
                label: format!("Cluster {} Confidence Region", index + 1),
                geometry: Geometry::Polyline(region.outline.clone()),
                style: Style {
                    color: color::color(index, n).into(),
                    marker: None,
                    line: Some(LineStyle {
                        width: STROKE_WIDTH,
                        dash: Dash::Dashed,
                    }),
                },
            });
        }

        series.sort_by_key(Series::order_key);
        series
    }

    /// Confidence regions for every cluster of `aggregation`.
    ///
    /// A cluster without a centroid or covariance, or whose covariance is
    /// degenerate, gets `None`; the others are unaffected.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidParameter`] if the configured confidence scale or
    /// sample count is invalid.
    pub fn regions(
        &self,
        aggregation: &Aggregation,
        result: &ClusteringResult,
    ) -> Result<Vec<Option<ConfidenceEllipse>>> {
        (0..aggregation.num_clusters())
            .map(|index| match (result.centroids.get(index), result.covariance(index)) {
                (Some(&center), Some(cov)) => {
                    let region = self.ellipses.confidence_region(center, cov)?;
                    if region.is_none() {
                        debug!("cluster {index}: no confidence region");
                    }
                    Ok(region)
                }
                _ => {
                    debug!("cluster {index}: missing centroid or covariance");
                    Ok(None)
                }
            })
            .collect()
    }

    /// Run the whole pipeline for one clustering result.
    ///
    /// `method` decides whether weights reach the statistics and whether
    /// covariances become regions.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InconsistentLabeling`] from aggregation, or a parameter
    /// error from [`RenderProjector::regions`].
    pub fn project_result(
        &self,
        points: &[Point],
        method: &MethodDescriptor,
        result: &ClusteringResult,
    ) -> Result<Vec<Series>> {
        let aggregation = aggregate_for(points, method, result)?;

        let centroids: &[Point] = if self.options.show_centroids {
            &result.centroids
        } else {
            &[]
        };

        let regions = if self.options.show_confidence_regions && method.covariance {
            self.regions(&aggregation, result)?
        } else {
            Vec::new()
        };

        let series = self.project(points, &aggregation, centroids, &regions);
        debug!(
            "{}: {} clusters projected into {} series",
            method.id,
            aggregation.num_clusters(),
            series.len()
        );
        Ok(series)
    }
}

/// Aggregate `result`, carrying weights only for methods that declare them.
pub(crate) fn aggregate_for(
    points: &[Point],
    method: &MethodDescriptor,
    result: &ClusteringResult,
) -> Result<Aggregation> {
    let weights = if method.weights {
        result.weights.as_deref()
    } else {
        None
    };
    aggregate(points, &result.labels, weights)
}

fn marker(symbol: MarkerSymbol, size: f64, line_width: Option<f64>) -> Marker {
    Marker {
        symbol,
        size,
        line_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Matrix2;

    fn points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.2, 0.1),
            Point::new(5.0, 5.0),
            Point::new(5.1, 4.8),
            Point::new(4.9, 5.2),
        ]
    }

    fn em_result() -> ClusteringResult {
        ClusteringResult::new(
            vec![0, 0, 1, 1, 1],
            vec![Point::new(0.1, 0.05), Point::new(5.0, 5.0)],
        )
        .with_covariances(vec![
            Matrix2::symmetric(0.5, 0.1, 0.3),
            Matrix2::symmetric(0.2, 0.0, 0.4),
        ])
        .with_weights(vec![0.4, 0.6])
    }

    fn roles(series: &[Series]) -> Vec<(SeriesRole, Option<usize>)> {
        series.iter().map(Series::order_key).collect()
    }

    #[test]
    fn unclustered_points() {
        let series = RenderProjector::default().project_points(&points());
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].role, SeriesRole::DataPoints);
        assert_eq!(series[0].label, "Data Points");
        assert_eq!(series[0].style.color, Color::MUTED);
        assert_eq!(series[0].geometry.len(), 5);
    }

    #[test]
    fn full_em_projection_order() {
        let series = RenderProjector::default()
            .project_result(&points(), &MethodDescriptor::em(), &em_result())
            .unwrap();

        assert_eq!(
            roles(&series),
            vec![
                (SeriesRole::ClusterMembers, Some(0)),
                (SeriesRole::ClusterMembers, Some(1)),
                (SeriesRole::Centroids, None),
                (SeriesRole::ConfidenceRegion, Some(0)),
                (SeriesRole::ConfidenceRegion, Some(1)),
            ]
        );
        assert_eq!(series[0].label, "Cluster 1");
        assert_eq!(series[1].geometry.len(), 3);
        assert_eq!(series[2].label, "Centroids");
        assert_eq!(series[3].label, "Cluster 1 Confidence Region");
        assert_eq!(series[3].geometry.len(), DEFAULT_SAMPLES + 1);
        assert_eq!(series[3].style.color, series[0].style.color);
        assert_eq!(series[4].style.line.map(|l| l.dash), Some(Dash::Dashed));
    }

    #[test]
    fn kmeans_gets_no_regions_even_with_covariances() {
        let series = RenderProjector::default()
            .project_result(&points(), &MethodDescriptor::kmeans(), &em_result())
            .unwrap();
        assert!(series
            .iter()
            .all(|s| s.role != SeriesRole::ConfidenceRegion));
    }

    #[test]
    fn capability_flag_enables_regions_for_new_methods() {
        let method = MethodDescriptor::new("gmm-full").with_covariance(true);
        let series = RenderProjector::default()
            .project_result(&points(), &method, &em_result())
            .unwrap();
        let regions = series
            .iter()
            .filter(|s| s.role == SeriesRole::ConfidenceRegion)
            .count();
        assert_eq!(regions, 2);
    }

    #[test]
    fn degenerate_cluster_is_skipped_alone() {
        let mut result = em_result();
        result.covariances = Some(vec![Matrix2::default(), Matrix2::symmetric(0.2, 0.0, 0.4)]);
        let series = RenderProjector::default()
            .project_result(&points(), &MethodDescriptor::em(), &result)
            .unwrap();
        let regions: Vec<_> = series
            .iter()
            .filter(|s| s.role == SeriesRole::ConfidenceRegion)
            .map(|s| s.cluster)
            .collect();
        assert_eq!(regions, vec![Some(1)]);
    }

    #[test]
    fn toggles_hide_centroids_and_regions() {
        let projector = RenderProjector::new(RenderOptions {
            show_centroids: false,
            show_confidence_regions: false,
            ..Default::default()
        });
        let series = projector
            .project_result(&points(), &MethodDescriptor::em(), &em_result())
            .unwrap();
        assert_eq!(
            roles(&series),
            vec![
                (SeriesRole::ClusterMembers, Some(0)),
                (SeriesRole::ClusterMembers, Some(1)),
            ]
        );
    }

    #[test]
    fn hierarchical_result_without_centroids() {
        let result = ClusteringResult::new(vec![1, 1, 0, 0, 0], Vec::new());
        let series = RenderProjector::default()
            .project_result(&points(), &MethodDescriptor::hierarchical(), &result)
            .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].geometry.points(), &points()[..2]);
    }

    #[test]
    fn empty_points_project_to_nothing() {
        let projector = RenderProjector::default();
        assert!(projector.project_points(&[]).is_empty());

        let result = ClusteringResult::new(Vec::new(), vec![Point::new(1.0, 1.0)]);
        let series = projector
            .project_result(&[], &MethodDescriptor::em(), &result)
            .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn projection_is_idempotent() {
        let projector = RenderProjector::default();
        let a = projector
            .project_result(&points(), &MethodDescriptor::em(), &em_result())
            .unwrap();
        let b = projector
            .project_result(&points(), &MethodDescriptor::em(), &em_result())
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn invalid_sample_count_is_reported() {
        let projector = RenderProjector::new(RenderOptions {
            samples: 1,
            ..Default::default()
        });
        assert!(projector
            .project_result(&points(), &MethodDescriptor::em(), &em_result())
            .is_err());
    }

    #[test]
    #[should_panic]
    fn aggregation_from_other_points_panics() {
        let agg = aggregate(&points(), &[0, 0, 1, 1, 1], None).unwrap();
        RenderProjector::default().project(&points()[..2], &agg, &[], &[]);
    }
}
