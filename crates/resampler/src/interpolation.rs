//! Interpolation kernels for grid sampling.
//!
//! All kernels sample a row-major `&[f32]` at a fractional `(x, y)`
//! coordinate, where `x` is the column and `y` the row. Each kernel has its
//! own documented policy for coordinates it cannot service; none of them
//! return errors.

use serde::{Deserialize, Serialize};

/// Nearest neighbor interpolation.
///
/// Rounds to the nearest cell. A rounded coordinate outside
/// `[0, height] x [0, width]` returns `0.0`; the rejection happens on the
/// unclamped coordinate, before each axis is clamped into the valid index
/// range.
pub fn nearest_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    let rx = x.round();
    let ry = y.round();

    if !(0.0..=width as f64).contains(&rx) || !(0.0..=height as f64).contains(&ry) {
        return 0.0;
    }

    let col = (rx as usize).min(width - 1);
    let row = (ry as usize).min(height - 1);
    data[row * width + col]
}

/// Bilinear interpolation.
///
/// Builds a neighborhood spanning `floor(x-1)..ceil(x+1)` per axis, clamps
/// each bound independently into the valid range, and returns the
/// area-weighted average of the four corner samples.
///
/// There is no explicit fill policy; the clamped neighborhood extrapolates
/// at the edges. For grids at least 3 wide and tall the corner spans are
/// never zero; on smaller grids the denominator can vanish and the caller is
/// responsible for detecting the resulting non-finite value.
pub fn bilinear_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    let max_col = (width - 1) as f64;
    let max_row = (height - 1) as f64;

    let x1 = (x - 1.0).floor().clamp(0.0, max_col);
    let x2 = (x + 1.0).ceil().clamp(0.0, max_col);
    let y1 = (y - 1.0).floor().clamp(0.0, max_row);
    let y2 = (y + 1.0).ceil().clamp(0.0, max_row);

    let v11 = data[y1 as usize * width + x1 as usize] as f64;
    let v21 = data[y1 as usize * width + x2 as usize] as f64;
    let v12 = data[y2 as usize * width + x1 as usize] as f64;
    let v22 = data[y2 as usize * width + x2 as usize] as f64;

    let denom = (x2 - x1) * (y2 - y1);
    let q11 = (x2 - x) * (y2 - y) / denom * v11;
    let q21 = (x - x1) * (y2 - y) / denom * v21;
    let q12 = (x2 - x) * (y - y1) / denom * v12;
    let q22 = (x - x1) * (y - y1) / denom * v22;

    (q11 + q21 + q12 + q22) as f32
}

/// Bicubic interpolation.
///
/// Separable Catmull-Rom over the 4x4 block around `(x, y)`. Any coordinate
/// within 2 cells of a border (`x <= 1`, `x >= width-2`, same for `y`) has
/// no full block and returns `0.0`.
pub fn cubic_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    let n = width as f64;
    let m = height as f64;

    if !(x > 1.0 && x < n - 2.0 && y > 1.0 && y < m - 2.0) {
        return 0.0;
    }

    let xi = x.floor() as usize;
    let yi = y.floor() as usize;
    let tx = (x - x.floor()) as f32;
    let ty = (y - y.floor()) as f32;

    let mut rows = [0.0f32; 4];
    for (j, row_value) in rows.iter_mut().enumerate() {
        let base = (yi + j - 1) * width + (xi - 1);
        *row_value = cubic_1d(data[base], data[base + 1], data[base + 2], data[base + 3], tx);
    }

    cubic_1d(rows[0], rows[1], rows[2], rows[3], ty)
}

/// 1D Catmull-Rom interpolation in Horner form, exact at `t = 0` (`p1`) and
/// `t = 1` (`p2`).
fn cubic_1d(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    p1 + 0.5
        * t
        * (p2 - p0 + t * (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3 + t * (3.0 * (p1 - p2) + p3 - p0)))
}

/// Interpolation method for grid resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    /// Nearest neighbor (preserves exact values).
    Nearest,
    /// Bilinear interpolation (smooth, slight value changes).
    #[default]
    Bilinear,
    /// Bicubic interpolation (smoothest, more compute).
    Cubic,
}

impl InterpolationMethod {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "nearest" => Self::Nearest,
            "cubic" | "bicubic" => Self::Cubic,
            _ => Self::Bilinear,
        }
    }

    /// Sample a grid at a fractional coordinate with this method.
    pub fn sample(&self, data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
        match self {
            Self::Nearest => nearest_interpolate(data, width, height, x, y),
            Self::Bilinear => bilinear_interpolate(data, width, height, x, y),
            Self::Cubic => cubic_interpolate(data, width, height, x, y),
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Bilinear => write!(f, "bilinear"),
            Self::Cubic => write!(f, "cubic"),
        }
    }
}
