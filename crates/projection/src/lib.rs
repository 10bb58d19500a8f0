//! Coordinate reference system transformations.
//!
//! Implements the spherical Web Mercator projection from scratch without
//! external dependencies, plus the pivot rule for composing transforms
//! between supported systems.

pub mod mercator;
pub mod transform;

pub use mercator::{to_web_mercator, to_wgs84, HALF_WORLD};
pub use transform::transform;

/// Errors raised by coordinate transformations.
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    /// The latitude lies outside the open Mercator domain (-90, 90); the
    /// forward formula would take the logarithm of a non-positive value.
    #[error("latitude {0} is outside the Web Mercator domain (-90, 90)")]
    LatitudeOutOfDomain(f64),
}
