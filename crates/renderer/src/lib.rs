//! Grid visualization: color ramp mapping and the rendering pipeline.
//!
//! [`gradient`] maps scalar values onto an ordered RGBA color ramp;
//! [`pipeline`] composes the resampling engine with the min/max scan and the
//! colorize pass into ready-to-encode RGBA buffers.

pub mod error;
pub mod gradient;
pub mod pipeline;

pub use error::{RenderError, RenderResult};
pub use gradient::{color_at, render_grid};
pub use pipeline::{render_ndvi, render_resampled, PipelineConfig, RenderedImage};
