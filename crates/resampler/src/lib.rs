//! Grid resampling and reprojection engine.
//!
//! Maps every pixel of a requested output grid back to a fractional
//! coordinate on an input grid and samples it there:
//!
//! ```text
//! output pixel (col, row)
//!      │
//!      ├─► same CRS:      proportional remap into input indices
//!      │
//!      ├─► different CRS: output geotransform ─► planar coordinate
//!      │                  ─► WGS84-pivot transform ─► input geotransform
//!      │
//!      └─► interpolate (nearest / bilinear / bicubic), store
//! ```
//!
//! Every output cell is independent of every other, so each pass can run on
//! the scalar reference path or the row-parallel path interchangeably
//! ([`ExecutionMode`]); both produce identical results.
//!
//! # Example
//!
//! ```
//! use raster_common::{CrsCode, GeoTransform, Grid};
//! use resampler::{resample, ExecutionMode, InterpolationMethod};
//!
//! let input = Grid::filled(8, 8, 1.5);
//! let input_transform = GeoTransform::from_bounds(0.0, 8.0, 8.0, 0.0, 1.0, -1.0).unwrap();
//! let output_transform = GeoTransform::from_bounds(0.0, 8.0, 8.0, 0.0, 0.5, -0.5).unwrap();
//!
//! let output = resample(
//!     &input,
//!     &input_transform,
//!     CrsCode::Epsg4326,
//!     &output_transform,
//!     CrsCode::Epsg4326,
//!     InterpolationMethod::Nearest,
//!     ExecutionMode::Scalar,
//! )
//! .unwrap();
//! assert_eq!(output.width(), 16);
//! ```

pub mod error;
pub mod execution;
pub mod interpolation;
pub mod ndvi;
pub mod reproject;

pub use error::{ResampleError, Result};
pub use execution::{for_each_row, try_for_each_row, ExecutionMode};
pub use interpolation::{
    bilinear_interpolate, cubic_interpolate, nearest_interpolate, InterpolationMethod,
};
pub use ndvi::{ndvi, ndvi_at, NO_SIGNAL};
pub use reproject::{resample, suggest_output_transform};
