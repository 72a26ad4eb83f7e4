//! Clustering results and their per-cluster statistics.
//!
//! The clustering itself runs elsewhere: a service receives the points, a
//! method identifier and a target cluster count, and answers with a
//! [`ClusteringResult`]. This module decodes that result and groups the points
//! by label.
//!
//! ## Methods
//!
//! Different methods return different extras:
//!
//! - **k-means** returns labels and centroids.
//! - **EM** (Gaussian mixture) also returns one covariance matrix and one
//!   mixture weight per component.
//! - **Hierarchical** (Ward linkage cut at `k` clusters) returns labels only.
//!
//! A [`MethodDescriptor`] declares which extras a method provides. Nothing in
//! the pipeline matches on the method name.
//!
//! ## Labels
//!
//! Labels must be dense: with `k = max(label) + 1` clusters every index in
//! `0..k` needs at least one point. Anything else is
//! [`crate::Error::InconsistentLabeling`]. An empty point set is valid and
//! aggregates to no clusters.
//!
//! ## Usage
//!
//! ```rust
//! use clusterviz::cluster::aggregate;
//! use clusterviz::geom::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.1, 0.1),
//!     Point::new(5.0, 5.0),
//!     Point::new(5.1, 5.0),
//!     Point::new(5.0, 5.1),
//! ];
//! let agg = aggregate(&points, &[0, 0, 1, 1, 1], None).unwrap();
//! assert_eq!(agg.clusters[0].size, 2);
//! assert_eq!(agg.clusters[1].percentage, 60.0);
//! ```

mod aggregate;
mod method;
mod result;
mod traits;

pub use aggregate::{aggregate, Aggregation, ClusterStats};
pub use method::MethodDescriptor;
pub use result::ClusteringResult;
pub use traits::{ClusterCompute, DataFetch};
