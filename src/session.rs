//! Immutable view state threaded through the pipeline.
//!
//! A [`Session`] is either [`Session::NoData`] or [`Session::Ready`]. Every
//! transition takes the current session by reference and returns a new one,
//! so a failed transition leaves the caller holding the previous state.
//! Outputs (series, statistics, title) are derived on demand and never
//! cached.
//!
//! ```rust
//! use clusterviz::cluster::{ClusteringResult, MethodDescriptor};
//! use clusterviz::geom::Point;
//! use clusterviz::render::RenderProjector;
//! use clusterviz::Session;
//!
//! let points = vec![Point::new(0.0, 0.0), Point::new(4.0, 4.0)];
//! let session = Session::new().with_points(points);
//! assert_eq!(session.project(&RenderProjector::default()).unwrap().len(), 1);
//!
//! let result = ClusteringResult::new(vec![0, 1], vec![Point::new(0.0, 0.0), Point::new(4.0, 4.0)]);
//! let session = session.attach(MethodDescriptor::kmeans(), result).unwrap();
//! assert_eq!(session.project(&RenderProjector::default()).unwrap().len(), 3);
//! ```

use std::sync::Arc;

use log::debug;

use crate::cluster::{Aggregation, ClusterCompute, ClusteringResult, DataFetch, MethodDescriptor};
use crate::error::{Error, Result};
use crate::geom::Point;
use crate::render::{aggregate_for, RenderProjector, Series, StatsReport};

/// Title shown before any clustering result is attached.
pub const UNCLUSTERED_TITLE: &str = "PCA Transformed Data";

/// A clustering result together with the method that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Attached {
    pub method: MethodDescriptor,
    pub result: ClusteringResult,
}

/// Points, plus the clustering result attached to them if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    points: Arc<[Point]>,
    attached: Option<Arc<Attached>>,
}

impl Snapshot {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn attached(&self) -> Option<&Attached> {
        self.attached.as_deref()
    }
}

/// View state of the clustering display.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    /// Waiting for the point set.
    #[default]
    NoData,
    /// Points are loaded; a result may or may not be attached.
    Ready(Snapshot),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Loaded points; empty while waiting for data.
    pub fn points(&self) -> &[Point] {
        match self {
            Self::NoData => &[],
            Self::Ready(snapshot) => snapshot.points(),
        }
    }

    pub fn attached(&self) -> Option<&Attached> {
        match self {
            Self::NoData => None,
            Self::Ready(snapshot) => snapshot.attached(),
        }
    }

    /// Replace the point set. Any attached result is dropped, since its labels
    /// describe the old points.
    pub fn with_points(&self, points: impl Into<Arc<[Point]>>) -> Session {
        Self::Ready(Snapshot {
            points: points.into(),
            attached: None,
        })
    }

    /// Attach a clustering result produced by `method`.
    ///
    /// # Errors
    ///
    /// [`Error::NoData`] before points are loaded;
    /// [`Error::InconsistentLabeling`] if the labels do not fit the points.
    pub fn attach(&self, method: MethodDescriptor, result: ClusteringResult) -> Result<Session> {
        let Self::Ready(snapshot) = self else {
            return Err(Error::NoData);
        };
        aggregate_for(snapshot.points(), &method, &result)?;
        Ok(Self::Ready(Snapshot {
            points: Arc::clone(&snapshot.points),
            attached: Some(Arc::new(Attached { method, result })),
        }))
    }

    /// Drop the attached result, keeping the points.
    pub fn detach(&self) -> Session {
        match self {
            Self::NoData => Self::NoData,
            Self::Ready(snapshot) => Self::Ready(Snapshot {
                points: Arc::clone(&snapshot.points),
                attached: None,
            }),
        }
    }

    /// Load points from `source`.
    ///
    /// # Errors
    ///
    /// Whatever `source` reports.
    pub fn load<F: DataFetch + ?Sized>(&self, source: &F) -> Result<Session> {
        let points = source.fetch()?;
        debug!("loaded {} points", points.len());
        Ok(self.with_points(points))
    }

    /// Cluster the loaded points with `service` and attach the result.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for `n_clusters == 0`, [`Error::NoData`]
    /// before points are loaded, any error from `service`, or
    /// [`Error::InconsistentLabeling`] for a result that does not fit.
    pub fn run<C: ClusterCompute + ?Sized>(
        &self,
        service: &C,
        method: MethodDescriptor,
        n_clusters: usize,
    ) -> Result<Session> {
        if n_clusters == 0 {
            return Err(Error::InvalidParameter {
                name: "n_clusters",
                message: "must be at least 1",
            });
        }
        if !self.is_ready() {
            return Err(Error::NoData);
        }
        debug!("clustering {} points with {} (k={n_clusters})", self.points().len(), method.id);
        let result = service.compute(self.points(), &method, n_clusters)?;
        self.attach(method, result)
    }

    /// Statistics of the attached result, if any.
    ///
    /// # Errors
    ///
    /// [`Error::InconsistentLabeling`]; unreachable for results that went
    /// through [`Session::attach`].
    pub fn aggregation(&self) -> Result<Option<Aggregation>> {
        self.attached()
            .map(|a| aggregate_for(self.points(), &a.method, &a.result))
            .transpose()
    }

    /// Statistics panel text; `None` until a result is attached.
    ///
    /// # Errors
    ///
    /// As for [`Session::aggregation`].
    pub fn report(&self) -> Result<Option<String>> {
        Ok(self
            .aggregation()?
            .map(|agg| StatsReport::new(&agg).to_string()))
    }

    /// Series for the current state: nothing while waiting for data, the
    /// plain points before clustering, the full set afterwards.
    ///
    /// # Errors
    ///
    /// As for [`RenderProjector::project_result`].
    pub fn project(&self, projector: &RenderProjector) -> Result<Vec<Series>> {
        match self.attached() {
            Some(a) => projector.project_result(self.points(), &a.method, &a.result),
            None => Ok(projector.project_points(self.points())),
        }
    }

    /// Plot title for the current state.
    pub fn title(&self) -> String {
        self.attached()
            .map_or_else(|| UNCLUSTERED_TITLE.to_string(), |a| a.method.title())
    }
}
