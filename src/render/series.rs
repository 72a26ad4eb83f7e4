use std::fmt;

use serde::Serialize;

use super::color::Hsl;
use crate::geom::Point;

/// What a series depicts. The declaration order is the draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesRole {
    /// All points, before any clustering result is attached.
    DataPoints,
    /// Points of one cluster.
    ClusterMembers,
    /// One marker per centroid.
    Centroids,
    /// Outline of one cluster's confidence ellipse.
    ConfidenceRegion,
}

/// Shape of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "points", rename_all = "snake_case")]
pub enum Geometry {
    /// Unconnected markers.
    Points(Vec<Point>),
    /// A connected line through the points, in order.
    Polyline(Vec<Point>),
}

impl Geometry {
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Points(p) | Self::Polyline(p) => p,
        }
    }

    pub fn len(&self) -> usize {
        self.points().len()
    }

    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}

/// A color hint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// A cluster color.
    Hsl(Hsl),
    /// A fixed color with alpha in `[0, 1]`.
    Rgba { r: u8, g: u8, b: u8, alpha: f64 },
}

impl Color {
    pub const BLACK: Color = Color::Rgba {
        r: 0,
        g: 0,
        b: 0,
        alpha: 1.0,
    };

    /// Translucent grey used for unclustered points.
    pub const MUTED: Color = Color::Rgba {
        r: 100,
        g: 100,
        b: 100,
        alpha: 0.5,
    };
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hsl(hsl) => fmt::Display::fmt(hsl, f),
            Self::Rgba { r, g, b, alpha } => write!(f, "rgba({r}, {g}, {b}, {alpha})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSymbol {
    Circle,
    Cross,
}

/// Marker hint for point geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub symbol: MarkerSymbol,
    /// Diameter in pixels.
    pub size: f64,
    /// Stroke width of the marker outline, if any.
    pub line_width: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dash {
    Solid,
    Dashed,
}

/// Stroke hint for polyline geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub width: f64,
    pub dash: Dash,
}

/// Style hints. Renderers are free to ignore any of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    pub color: Color,
    pub marker: Option<Marker>,
    pub line: Option<LineStyle>,
}

/// One drawable layer, independent of any charting library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub role: SeriesRole,
    /// Cluster this series belongs to, for per-cluster roles.
    pub cluster: Option<usize>,
    /// Legend text.
    pub label: String,
    pub geometry: Geometry,
    pub style: Style,
}

impl Series {
    /// Sort key: role first, then cluster index.
    pub fn order_key(&self) -> (SeriesRole, Option<usize>) {
        (self.role, self.cluster)
    }
}
