//! Gradient rendering: scalar values to color ramp positions.

use raster_common::{Color, ColorRamp, Grid};
use resampler::{for_each_row, ExecutionMode};

/// Map a value onto a color ramp given a display range.
///
/// The value is normalized to `[0, 1]` against `[min, max]` (clamped; a
/// degenerate range normalizes as if it were 1 wide), located within one of
/// the ramp's `N - 1` equal segments, and linearly blended between the
/// segment's two stops. The last segment repeats its own color at the tail,
/// so ratio 0 returns the first stop exactly and ratio 1 the last.
///
/// Only meaningful for finite values; callers route non-finite samples to a
/// fill color instead.
pub fn color_at(value: f32, min: f32, max: f32, ramp: &ColorRamp) -> Color {
    let range = max - min;
    let range = if range.abs() < f32::EPSILON { 1.0 } else { range };
    let ratio = ((value - min) / range).clamp(0.0, 1.0);

    let stops = ramp.stops();
    let segment_width = 1.0 / (stops.len() - 1) as f32;
    let segment = ((ratio / segment_width).floor() as usize).min(stops.len() - 1);
    let end = (segment + 1).min(stops.len() - 1);

    let t = (ratio - segment as f32 * segment_width) / segment_width;
    blend(stops[segment], stops[end], t)
}

/// Linear blend between two stops, exact at `t = 0` and `t = 1`.
fn blend(start: Color, end: Color, t: f32) -> Color {
    let lerp = |a: u8, b: u8| -> u8 { (a as f32 * (1.0 - t) + b as f32 * t).round() as u8 };

    Color::new(
        lerp(start.r, end.r),
        lerp(start.g, end.g),
        lerp(start.b, end.b),
        lerp(start.a, end.a),
    )
}

/// Render a grid to a row-major RGBA buffer (4 bytes per pixel, alpha last).
///
/// Non-finite samples render transparent. The pass runs row-parallel or
/// scalar per `mode`; both produce identical buffers.
pub fn render_grid(
    grid: &Grid,
    min: f32,
    max: f32,
    ramp: &ColorRamp,
    mode: ExecutionMode,
) -> Vec<u8> {
    let width = grid.width();
    if grid.is_empty() {
        return Vec::new();
    }

    let data = grid.as_slice();
    let mut pixels = vec![0u8; grid.len() * 4];

    for_each_row(mode, &mut pixels, width * 4, |row, out_row| {
        for (col, px) in out_row.chunks_exact_mut(4).enumerate() {
            let value = data[row * width + col];
            let color = if value.is_finite() {
                color_at(value, min, max, ramp)
            } else {
                Color::transparent()
            };
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    });

    pixels
}
