//! Error types for rendering.

use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a grid.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The upstream resampling or compositing pass failed.
    #[error(transparent)]
    Resample(#[from] resampler::ResampleError),

    /// Invalid raster or ramp input.
    #[error(transparent)]
    Raster(#[from] raster_common::RasterError),

    /// The grid holds no finite values, so no display range exists.
    #[error("grid has no finite values to derive a display range from")]
    NoFiniteValues,
}
