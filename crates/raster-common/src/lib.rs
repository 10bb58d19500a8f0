//! Common types shared across the raster-engine crates.

pub mod crs;
pub mod error;
pub mod grid;
pub mod style;

pub use crs::{CrsCode, CrsParseError};
pub use error::{RasterError, RasterResult};
pub use grid::{GeoTransform, Grid};
pub use style::{Color, ColorRamp};
