//! Error types for the common raster data model.

use thiserror::Error;

/// Result type alias using RasterError.
pub type RasterResult<T> = Result<T, RasterError>;

/// Errors raised while constructing or validating raster data types.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The sample buffer does not match the declared grid shape.
    #[error("grid shape mismatch: {width}x{height} grid cannot hold {len} samples")]
    ShapeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },

    /// A row-of-rows input had rows of differing length.
    #[error("ragged grid: row {row} has {len} samples, expected {width}")]
    RaggedRow {
        row: usize,
        len: usize,
        width: usize,
    },

    /// A geotransform's extent, resolution, and pixel counts disagree.
    #[error("invalid geotransform: {0}")]
    InvalidGeoTransform(String),

    /// A color ramp fails its structural requirements.
    #[error("invalid color ramp: {0}")]
    InvalidRamp(String),

    /// Failed to parse a configuration document.
    #[error("parse error: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for RasterError {
    fn from(err: serde_json::Error) -> Self {
        RasterError::ParseError(err.to_string())
    }
}
