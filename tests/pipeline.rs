use approx::assert_abs_diff_eq;
use clusterviz::geom::ConfidenceLevel;
use clusterviz::render::{Color, Geometry};
use clusterviz::{
    ClusteringResult, MethodDescriptor, Point, RenderConfig, RenderOptions, RenderProjector,
    SeriesRole, Session,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn points() -> Vec<Point> {
    vec![
        Point::new(-1.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 0.5),
        Point::new(10.0, 10.0),
        Point::new(10.5, 9.5),
    ]
}

const EM_BODY: &str = r#"{
    "labels": [0, 0, 0, 1, 1],
    "centroids": [[0.0, 0.0], [10.25, 9.75]],
    "covariances": [
        [[4.0, 0.0], [0.0, 1.0]],
        [[0.0, 0.0], [0.0, 0.0]]
    ],
    "weights": [0.6, 0.4]
}"#;

#[test]
fn em_result_end_to_end() {
    init_logging();

    let result = ClusteringResult::from_json(EM_BODY).unwrap();
    let session = Session::new()
        .with_points(points())
        .attach(MethodDescriptor::em(), result)
        .unwrap();

    let series = session.project(&RenderProjector::default()).unwrap();
    let roles: Vec<SeriesRole> = series.iter().map(|s| s.role).collect();
    // The zero covariance of cluster 2 yields no region; everything else renders.
    assert_eq!(
        roles,
        vec![
            SeriesRole::ClusterMembers,
            SeriesRole::ClusterMembers,
            SeriesRole::Centroids,
            SeriesRole::ConfidenceRegion,
        ]
    );

    let region = &series[3];
    assert_eq!(region.cluster, Some(0));
    let Geometry::Polyline(outline) = &region.geometry else {
        panic!("confidence region should be a polyline");
    };
    let scale = ConfidenceLevel::P95.scale();
    assert_eq!(outline.len(), 101);
    assert_eq!(outline[0], outline[100]);
    assert_abs_diff_eq!(outline[0].x, 2.0 * scale, epsilon = 1e-12);
    assert_abs_diff_eq!(outline[0].y, 0.0, epsilon = 1e-12);

    assert_eq!(series[2].style.color, Color::BLACK);
    assert_eq!(series[2].geometry.points(), &[Point::new(0.0, 0.0), Point::new(10.25, 9.75)]);

    let report = session.report().unwrap().unwrap();
    assert_eq!(
        report,
        "Number of Clusters: 2\n\
         Points per Cluster:\n  \
         Cluster 1: 3 points (60.0%)\n  \
         Cluster 2: 2 points (40.0%)\n\
         Component Weights:\n  \
         Component 1: 60.0%\n  \
         Component 2: 40.0%\n"
    );
}

#[test]
fn configured_projector() {
    init_logging();

    let config = RenderConfig::from_json(
        r#"{
            "render": {"show_centroids": false, "confidence": {"scale": 1.0}, "samples": 4},
            "methods": [{"id": "vbgmm", "covariance": true}]
        }"#,
    )
    .unwrap();
    let method = config.method("vbgmm").unwrap();
    let projector = RenderProjector::new(config.render.clone());
    assert_eq!(
        projector.options(),
        &RenderOptions {
            show_centroids: false,
            show_confidence_regions: true,
            confidence: ConfidenceLevel::Scale(1.0),
            samples: 4,
        }
    );

    let result = ClusteringResult::from_json(EM_BODY).unwrap();
    let series = Session::new()
        .with_points(points())
        .attach(method, result)
        .unwrap()
        .project(&projector)
        .unwrap();

    assert!(series.iter().all(|s| s.role != SeriesRole::Centroids));
    let outline = series.last().unwrap().geometry.points();
    assert_eq!(outline.len(), 5);
    assert_abs_diff_eq!(outline[1].x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(outline[1].y, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(outline[2].x, -2.0, epsilon = 1e-12);
}

#[test]
fn bad_labels_surface_to_caller() {
    init_logging();

    let result = ClusteringResult::from_json(r#"{"labels": [0, 0, 3, 1, 1]}"#).unwrap();
    let err = Session::new()
        .with_points(points())
        .attach(MethodDescriptor::kmeans(), result)
        .unwrap_err();
    assert!(err.to_string().starts_with("inconsistent labeling"));
}
