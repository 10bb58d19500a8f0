//! Output-grid-driven resampling and reprojection.
//!
//! The engine walks the requested output grid and pulls each pixel from the
//! input: same-CRS requests use a pure proportional index remap, cross-CRS
//! requests route the output pixel's planar coordinate through the WGS84
//! pivot into the input's coordinate system and then through the input
//! geotransform into fractional grid indices.

use crate::error::{ResampleError, Result};
use crate::execution::{try_for_each_row, ExecutionMode};
use crate::interpolation::InterpolationMethod;
use projection::transform;
use raster_common::{CrsCode, GeoTransform, Grid};
use tracing::debug;

/// Resample an input grid onto the grid described by `output_transform`.
///
/// For every output pixel the fractional input coordinate is computed
/// (proportionally when both grids share a CRS, through the projection pivot
/// otherwise) and sampled with `method`. Out-of-range samples follow the
/// kernel's own fill policy and never fail the pass; projection domain
/// errors abort it with no partial output.
pub fn resample(
    input: &Grid,
    input_transform: &GeoTransform,
    input_crs: CrsCode,
    output_transform: &GeoTransform,
    output_crs: CrsCode,
    method: InterpolationMethod,
    mode: ExecutionMode,
) -> Result<Grid> {
    check_transform_shape(input, input_transform)?;
    input_transform.validate()?;
    output_transform.validate()?;

    let (out_nx, out_ny) = output_transform.shape();
    if out_nx == 0 || out_ny == 0 {
        return Err(ResampleError::Config(format!(
            "output shape {}x{} is empty",
            out_nx, out_ny
        )));
    }

    let in_nx = input.width();
    let in_ny = input.height();
    let data = input.as_slice();
    let reprojecting = input_crs != output_crs;

    let mut output = vec![0.0f32; out_nx * out_ny];
    try_for_each_row(
        mode,
        &mut output,
        out_nx,
        |row, out_row| -> Result<()> {
            for (col, cell) in out_row.iter_mut().enumerate() {
                let (ix, iy) = if reprojecting {
                    let (px, py) = output_transform.pixel_to_coord(col as f64, row as f64);
                    let (x, y) = transform(output_crs, input_crs, px, py)?;
                    input_transform.coord_to_pixel(x, y)
                } else {
                    // Proportional remap; absolute georeferencing is ignored
                    // when no reprojection is requested.
                    (
                        in_nx as f64 * col as f64 / out_nx as f64,
                        in_ny as f64 * row as f64 / out_ny as f64,
                    )
                };
                *cell = method.sample(data, in_nx, in_ny, ix, iy);
            }
            Ok(())
        },
    )?;

    debug!(
        out_nx,
        out_ny,
        %method,
        reprojecting,
        "resampled {}x{} grid",
        in_nx,
        in_ny
    );

    Ok(Grid::new(output, out_nx, out_ny)?)
}

/// Derive an output placement for reprojecting `input_transform` into
/// `target_crs`, preserving the source's diagonal pixel count.
///
/// Both extent corners are projected into the target system and the output
/// resolution is the projected diagonal length divided by the source
/// diagonal pixel count, yielding square output pixels.
pub fn suggest_output_transform(
    input_transform: &GeoTransform,
    input_crs: CrsCode,
    target_crs: CrsCode,
) -> Result<GeoTransform> {
    input_transform.validate()?;

    let (x1, y1) = transform(
        input_crs,
        target_crs,
        input_transform.x1,
        input_transform.y1,
    )?;
    let (x2, y2) = transform(
        input_crs,
        target_crs,
        input_transform.x2,
        input_transform.y2,
    )?;

    let diag_pixels = ((input_transform.nx.pow(2) + input_transform.ny.pow(2)) as f64)
        .sqrt()
        .floor();
    let res = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt() / diag_pixels;

    Ok(GeoTransform::from_bounds(x1, y1, x2, y2, res, -res)?)
}

fn check_transform_shape(grid: &Grid, transform: &GeoTransform) -> Result<()> {
    if grid.is_empty() {
        return Err(ResampleError::Config("input grid is empty".to_string()));
    }
    if transform.nx != grid.width() || transform.ny != grid.height() {
        return Err(ResampleError::ShapeMismatch(format!(
            "grid is {}x{} but its geotransform declares {}x{}",
            grid.width(),
            grid.height(),
            transform.nx,
            transform.ny
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_transform(nx: usize, ny: usize) -> GeoTransform {
        GeoTransform::from_bounds(0.0, ny as f64, nx as f64, 0.0, 1.0, -1.0).unwrap()
    }

    #[test]
    fn test_identity_resample_nearest() {
        let input = Grid::new((0..16).map(|i| i as f32).collect(), 4, 4).unwrap();
        let gt = unit_transform(4, 4);

        let output = resample(
            &input,
            &gt,
            CrsCode::Epsg4326,
            &gt,
            CrsCode::Epsg4326,
            InterpolationMethod::Nearest,
            ExecutionMode::Scalar,
        )
        .unwrap();

        // Same shape, same CRS: the proportional remap hits each source cell
        // exactly.
        assert_eq!(output.as_slice(), input.as_slice());
    }

    #[test]
    fn test_upscale_shape() {
        let input = Grid::filled(4, 4, 2.5);
        let output = resample(
            &input,
            &unit_transform(4, 4),
            CrsCode::Epsg4326,
            &unit_transform(10, 6),
            CrsCode::Epsg4326,
            InterpolationMethod::Nearest,
            ExecutionMode::Scalar,
        )
        .unwrap();

        assert_eq!(output.width(), 10);
        assert_eq!(output.height(), 6);
        assert!(output.as_slice().iter().all(|&v| v == 2.5));
    }

    #[test]
    fn test_shape_mismatch_fails_fast() {
        let input = Grid::filled(4, 4, 0.0);
        let err = resample(
            &input,
            &unit_transform(5, 4),
            CrsCode::Epsg4326,
            &unit_transform(8, 8),
            CrsCode::Epsg4326,
            InterpolationMethod::Bilinear,
            ExecutionMode::Scalar,
        )
        .unwrap_err();

        assert!(matches!(err, ResampleError::ShapeMismatch(_)));
    }

    #[test]
    fn test_reprojection_out_of_domain_latitude_fails() {
        let input = Grid::filled(4, 4, 1.0);
        // A geographic grid whose top edge sits on the pole: projecting the
        // first output row to Web Mercator has no image.
        let input_gt = GeoTransform::from_bounds(0.0, 90.0, 4.0, 86.0, 1.0, -1.0).unwrap();
        let out_gt = GeoTransform::from_bounds(0.0, 90.0, 4.0, 86.0, 1.0, -1.0).unwrap();

        let err = resample(
            &input,
            &input_gt,
            CrsCode::Epsg3857,
            &out_gt,
            CrsCode::Epsg4326,
            InterpolationMethod::Bilinear,
            ExecutionMode::Scalar,
        )
        .unwrap_err();

        assert!(matches!(err, ResampleError::Projection(_)));
    }

    #[test]
    fn test_cross_crs_identity_of_coordinates() {
        // Reprojecting a mercator grid onto its own geographic footprint:
        // every output pixel must land back inside the input grid.
        let input = Grid::new((0..64).map(|i| i as f32).collect(), 8, 8).unwrap();
        let (mx1, my1) = projection::to_web_mercator(0.0, 52.0).unwrap();
        let (mx2, my2) = projection::to_web_mercator(8.0, 44.0).unwrap();
        let input_gt = GeoTransform::from_bounds(
            mx1,
            my1,
            mx2,
            my2,
            (mx2 - mx1) / 8.0,
            (my2 - my1) / 8.0,
        )
        .unwrap();
        let out_gt = GeoTransform::from_bounds(0.0, 52.0, 8.0, 44.0, 1.0, -1.0).unwrap();

        let output = resample(
            &input,
            &input_gt,
            CrsCode::Epsg3857,
            &out_gt,
            CrsCode::Epsg4326,
            InterpolationMethod::Nearest,
            ExecutionMode::Scalar,
        )
        .unwrap();

        // The corner pixel maps to the corner coordinate, which is exactly
        // input cell (0, 0).
        assert_eq!(output.get(0, 0), input.get(0, 0));
        // Nothing falls outside the nearest kernel's bound check.
        assert!(output.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_suggest_output_transform_preserves_diagonal() {
        let input_gt = GeoTransform::from_bounds(10.0, 54.0, 14.0, 50.0, 0.01, -0.01).unwrap();
        let out_gt =
            suggest_output_transform(&input_gt, CrsCode::Epsg4326, CrsCode::Epsg3857).unwrap();

        out_gt.validate().unwrap();
        assert!(out_gt.x_res > 0.0);
        assert_eq!(out_gt.y_res, -out_gt.x_res);

        let src_diag = ((input_gt.nx.pow(2) + input_gt.ny.pow(2)) as f64).sqrt();
        let out_diag = ((out_gt.nx.pow(2) + out_gt.ny.pow(2)) as f64).sqrt();
        // Square output pixels over the projected extent keep the pixel
        // diagonal within a few percent of the source.
        assert!((out_diag - src_diag).abs() / src_diag < 0.05);
    }
}
