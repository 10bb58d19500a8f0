//! Normalized difference index over two co-registered bands.

use crate::error::{ResampleError, Result};
use crate::execution::{for_each_row, ExecutionMode};
use crate::interpolation::cubic_interpolate;
use raster_common::{GeoTransform, Grid};
use tracing::debug;

/// Sentinel stored where the index is undefined.
///
/// Returned when both bands sample to the same value (including both zero)
/// or the quotient is otherwise non-finite. It reads like a valid index but
/// means "no signal", not a true ratio of -1.
pub const NO_SIGNAL: f32 = -1.0;

/// Compute the normalized difference `(b - a) / (b + a)` of two bands at one
/// fractional grid coordinate.
///
/// Both bands are sampled bicubically at the same coordinate, so the 2-cell
/// zero border of the kernel applies. Degenerate denominators resolve to
/// [`NO_SIGNAL`] instead of propagating NaN.
pub fn ndvi_at(band_a: &Grid, band_b: &Grid, x: f64, y: f64) -> f32 {
    let a = cubic_interpolate(band_a.as_slice(), band_a.width(), band_a.height(), x, y);
    let b = cubic_interpolate(band_b.as_slice(), band_b.width(), band_b.height(), x, y);

    if a == b {
        return NO_SIGNAL;
    }

    let v = (b - a) / (b + a);
    if v.is_finite() {
        v
    } else {
        NO_SIGNAL
    }
}

/// Compute a normalized difference index grid at the requested output shape.
///
/// The bands must be co-registered: identical dimensions and identical
/// geotransforms. Output pixels map proportionally onto the shared input
/// grid and both bands are sampled bicubically at the same coordinate.
pub fn ndvi(
    band_a: &Grid,
    a_transform: &GeoTransform,
    band_b: &Grid,
    b_transform: &GeoTransform,
    out_nx: usize,
    out_ny: usize,
    mode: ExecutionMode,
) -> Result<Grid> {
    if band_a.width() != band_b.width() || band_a.height() != band_b.height() {
        return Err(ResampleError::ShapeMismatch(format!(
            "band shapes differ: {}x{} vs {}x{}",
            band_a.width(),
            band_a.height(),
            band_b.width(),
            band_b.height()
        )));
    }
    if a_transform != b_transform {
        return Err(ResampleError::NotCoRegistered(
            "band geotransforms are not identical".to_string(),
        ));
    }
    if a_transform.nx != band_a.width() || a_transform.ny != band_a.height() {
        return Err(ResampleError::ShapeMismatch(format!(
            "bands are {}x{} but their geotransform declares {}x{}",
            band_a.width(),
            band_a.height(),
            a_transform.nx,
            a_transform.ny
        )));
    }
    if out_nx == 0 || out_ny == 0 {
        return Err(ResampleError::Config(format!(
            "output shape {}x{} is empty",
            out_nx, out_ny
        )));
    }

    let in_nx = band_a.width();
    let in_ny = band_a.height();

    let mut output = vec![0.0f32; out_nx * out_ny];
    for_each_row(mode, &mut output, out_nx, |row, out_row| {
        let iy = in_ny as f64 * row as f64 / out_ny as f64;
        for (col, cell) in out_row.iter_mut().enumerate() {
            let ix = in_nx as f64 * col as f64 / out_nx as f64;
            *cell = ndvi_at(band_a, band_b, ix, iy);
        }
    });

    debug!(out_nx, out_ny, "computed index over {}x{} bands", in_nx, in_ny);

    Ok(Grid::new(output, out_nx, out_ny)?)
}
