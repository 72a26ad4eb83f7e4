//! Renderer-agnostic output of the pipeline.
//!
//! [`RenderProjector`] produces a list of [`Series`], each tagged with a
//! [`SeriesRole`] and carrying geometry, style hints and legend text. A chart
//! library adapter consumes the list; nothing in this module knows about one.
//!
//! Series are ordered by role (data points, cluster members, centroids,
//! confidence regions) and then by cluster index, so projecting the same
//! input twice yields equal lists.
//!
//! Cluster `i` of `n` is drawn in [`color(i, n)`](color::color): hues spaced
//! `360/n` degrees apart at 70% saturation and 50% lightness.

pub mod color;
mod projector;
mod report;
mod series;

pub use color::{palette, Hsl};
pub use projector::{RenderOptions, RenderProjector};
pub(crate) use projector::aggregate_for;
pub use report::StatsReport;
pub use series::{Color, Dash, Geometry, LineStyle, Marker, MarkerSymbol, Series, SeriesRole, Style};
