//! Error types for the resampling engine.

use thiserror::Error;

/// Errors that can occur while resampling or compositing grids.
#[derive(Debug, Error)]
pub enum ResampleError {
    /// Invalid engine configuration (empty shapes, inconsistent requests).
    #[error("configuration error: {0}")]
    Config(String),

    /// Grid dimensions disagree with what the operation requires.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Two bands claimed to be co-registered have different placements.
    #[error("bands are not co-registered: {0}")]
    NotCoRegistered(String),

    /// Coordinate transform failure.
    #[error("projection error: {0}")]
    Projection(#[from] projection::ProjectionError),

    /// Invalid raster input.
    #[error(transparent)]
    Raster(#[from] raster_common::RasterError),
}

/// Result type for resampler operations.
pub type Result<T> = std::result::Result<T, ResampleError>;
