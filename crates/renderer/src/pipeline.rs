//! The rendering pipeline: resample or index, scan, colorize.
//!
//! Each entry point runs three stages with a hard barrier between them: the
//! engine pass produces an immutable output grid, a full min/max scan
//! derives the display range, and only then does the colorize pass start.

use raster_common::{ColorRamp, CrsCode, GeoTransform, Grid};
use resampler::{ndvi, resample, ExecutionMode, InterpolationMethod};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RenderResult;
use crate::gradient::render_grid;
use crate::RenderError;

/// Configuration for a rendering pipeline run.
///
/// Everything the pipeline varies on is carried here explicitly; there is no
/// global state. The output shape is the `nx`/`ny` of `output_transform`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Interpolation kernel for resampling passes.
    #[serde(default)]
    pub interpolation: InterpolationMethod,

    /// Execution strategy for every pass.
    #[serde(default)]
    pub execution: ExecutionMode,

    /// Placement and shape of the output grid.
    pub output_transform: GeoTransform,

    /// Coordinate system the output grid is expressed in.
    pub target_crs: CrsCode,

    /// Color ramp for the colorize stage.
    pub ramp: ColorRamp,
}

impl PipelineConfig {
    /// Create a config with default interpolation (bilinear) and execution
    /// (parallel).
    pub fn new(output_transform: GeoTransform, target_crs: CrsCode, ramp: ColorRamp) -> Self {
        Self {
            interpolation: InterpolationMethod::default(),
            execution: ExecutionMode::default(),
            output_transform,
            target_crs,
            ramp,
        }
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(raster_common::RasterError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> RenderResult<()> {
        self.output_transform.validate()?;
        Ok(())
    }

    /// Output grid shape as `(nx, ny)`.
    pub fn output_shape(&self) -> (usize, usize) {
        self.output_transform.shape()
    }
}

/// A rendered RGBA buffer ready for an image encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    /// Row-major RGBA bytes, alpha last.
    pub pixels: Vec<u8>,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

/// Resample (and reproject if the systems differ) an input grid onto the
/// configured output grid, then colorize it over its own value range.
pub fn render_resampled(
    input: &Grid,
    input_transform: &GeoTransform,
    input_crs: CrsCode,
    config: &PipelineConfig,
) -> RenderResult<RenderedImage> {
    config.validate()?;

    let grid = resample(
        input,
        input_transform,
        input_crs,
        &config.output_transform,
        config.target_crs,
        config.interpolation,
        config.execution,
    )?;

    colorize(grid, config)
}

/// Compute an NDVI grid from two co-registered bands at the configured
/// output shape, then colorize it over its own value range.
///
/// The index always samples bicubically at proportional coordinates, so the
/// config's interpolation and target CRS do not apply to this path.
pub fn render_ndvi(
    band_a: &Grid,
    a_transform: &GeoTransform,
    band_b: &Grid,
    b_transform: &GeoTransform,
    config: &PipelineConfig,
) -> RenderResult<RenderedImage> {
    config.validate()?;

    let (out_nx, out_ny) = config.output_shape();
    let grid = ndvi(
        band_a,
        a_transform,
        band_b,
        b_transform,
        out_nx,
        out_ny,
        config.execution,
    )?;

    colorize(grid, config)
}

/// Scan the grid for its display range, then map it through the ramp.
fn colorize(grid: Grid, config: &PipelineConfig) -> RenderResult<RenderedImage> {
    let (min, max) = grid.value_range().ok_or(RenderError::NoFiniteValues)?;
    debug!(min, max, "scanned value range");

    let pixels = render_grid(&grid, min, max, &config.ramp, config.execution);
    debug!(
        width = grid.width(),
        height = grid.height(),
        "rendered RGBA buffer"
    );

    Ok(RenderedImage {
        pixels,
        width: grid.width(),
        height: grid.height(),
    })
}
