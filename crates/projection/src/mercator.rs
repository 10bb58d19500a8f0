//! Spherical Web Mercator (EPSG:3857) forward and inverse formulas.

use crate::ProjectionError;
use std::f64::consts::PI;

/// Half the Mercator world width in meters at zoom 0.
pub const HALF_WORLD: f64 = 20037508.34;

/// Project a WGS84 coordinate to Web Mercator meters.
///
/// Latitudes at or beyond the poles have no Mercator image; they fail with a
/// domain error instead of propagating NaN downstream.
pub fn to_web_mercator(lon: f64, lat: f64) -> Result<(f64, f64), ProjectionError> {
    if lat <= -90.0 || lat >= 90.0 || lat.is_nan() {
        return Err(ProjectionError::LatitudeOutOfDomain(lat));
    }

    let x = lon * HALF_WORLD / 180.0;
    let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0) * (HALF_WORLD / 180.0);
    Ok((x, y))
}

/// Unproject Web Mercator meters to a WGS84 coordinate.
///
/// Total: every finite input maps to a finite (lon, lat), with latitude in
/// the open interval (-90, 90).
pub fn to_wgs84(x: f64, y: f64) -> (f64, f64) {
    let lon = x * 180.0 / HALF_WORLD;
    let lat = 360.0 / PI * (y / (HALF_WORLD / 180.0) * (PI / 180.0)).exp().atan() - 90.0;
    (lon, lat)
}
