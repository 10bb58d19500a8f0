//! Composition of coordinate transforms through a WGS84 pivot.

use crate::mercator::{to_web_mercator, to_wgs84};
use crate::ProjectionError;
use raster_common::CrsCode;

/// Convert a coordinate from one CRS to another.
///
/// Identical systems short-circuit to the identity. Otherwise the coordinate
/// always travels through WGS84 as the pivot system (A -> WGS84 -> B); there
/// is no direct arbitrary-to-arbitrary path.
pub fn transform(
    from: CrsCode,
    to: CrsCode,
    x: f64,
    y: f64,
) -> Result<(f64, f64), ProjectionError> {
    if from == to {
        return Ok((x, y));
    }

    let (lon, lat) = match from {
        CrsCode::Epsg4326 => (x, y),
        CrsCode::Epsg3857 => to_wgs84(x, y),
    };

    match to {
        CrsCode::Epsg4326 => Ok((lon, lat)),
        CrsCode::Epsg3857 => to_web_mercator(lon, lat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_short_circuit() {
        let (x, y) = transform(CrsCode::Epsg3857, CrsCode::Epsg3857, 12345.6, -98765.4).unwrap();
        assert_eq!(x, 12345.6);
        assert_eq!(y, -98765.4);

        // Identity holds even for coordinates the forward projection rejects.
        let (lon, lat) = transform(CrsCode::Epsg4326, CrsCode::Epsg4326, 0.0, 90.0).unwrap();
        assert_eq!(lon, 0.0);
        assert_eq!(lat, 90.0);
    }

    #[test]
    fn test_pivot_matches_direct_formulas() {
        let (x, y) = transform(CrsCode::Epsg4326, CrsCode::Epsg3857, 10.0, 53.5).unwrap();
        let (ex, ey) = to_web_mercator(10.0, 53.5).unwrap();
        assert_eq!(x, ex);
        assert_eq!(y, ey);

        let (lon, lat) = transform(CrsCode::Epsg3857, CrsCode::Epsg4326, ex, ey).unwrap();
        assert!((lon - 10.0).abs() < 1e-6);
        assert!((lat - 53.5).abs() < 1e-6);
    }

    #[test]
    fn test_domain_error_propagates() {
        assert!(transform(CrsCode::Epsg4326, CrsCode::Epsg3857, 0.0, 90.0).is_err());
    }
}
