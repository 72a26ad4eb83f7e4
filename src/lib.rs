//! Derived geometry for 2D clustering results.
//!
//! `clusterviz` turns the output of an external clustering service (labels,
//! centroids, optional per-cluster covariances and weights) into data a chart
//! library can draw:
//! - per-cluster statistics (sizes, percentages, weights)
//! - confidence ellipses from closed-form 2×2 eigendecomposition
//! - an ordered, renderer-agnostic list of series with deterministic colors
//!
//! Everything is a pure, synchronous transform; [`Session`] holds the current
//! points and result as an immutable snapshot.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod config;
pub mod error;
pub mod geom;
pub mod render;
pub mod session;

pub use cluster::{
    aggregate, Aggregation, ClusterCompute, ClusterStats, ClusteringResult, DataFetch,
    MethodDescriptor,
};
pub use config::{load_config, RenderConfig};
pub use error::{Error, Result};
pub use geom::{
    solve_symmetric, ConfidenceEllipse, ConfidenceLevel, EigenPair, EllipseGenerator, Matrix2,
    Point,
};
pub use render::{RenderOptions, RenderProjector, Series, SeriesRole, StatsReport};
pub use session::Session;
