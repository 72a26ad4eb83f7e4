use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the geometry pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// A covariance matrix cannot be eigendecomposed, or its ellipse is undefined.
    ///
    /// Callers projecting a whole result recover from this by omitting the
    /// cluster's confidence region.
    #[error("degenerate matrix: {reason}")]
    DegenerateMatrix {
        /// Human-readable explanation.
        reason: &'static str,
    },

    /// Labels do not describe the points they were computed for.
    #[error("inconsistent labeling: {reason}")]
    InconsistentLabeling {
        /// Human-readable explanation.
        reason: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Clustering was requested before any points were loaded.
    #[error("no data available")]
    NoData,

    /// JSON input (a clustering result or a configuration) could not be decoded.
    #[error("malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// A render configuration file could not be read or parsed.
    #[error("failed to load config {}: {message}", .path.display())]
    Config {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },

    /// Failure reported by an external data or clustering collaborator.
    #[error("{0}")]
    Collaborator(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
