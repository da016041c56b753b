//! Rasterlab Core - image ingestion and geometric transform pipeline
//!
//! Loads a JPEG from disk, crops a square window, converts it to
//! grayscale, optionally transposes it, and annotates the result with
//! labelled axes. Presenting the result is left to a [`Display`]
//! implementation supplied by the caller.

pub mod annotate;
pub mod buffer;
pub mod decode;
pub mod error;
pub mod filter;
pub mod luminance;
pub mod pipeline;
pub mod transform;
pub mod validate;

pub use annotate::{annotate, annotate_with, AnnotatedCanvas, AxisSpec};
pub use buffer::{PixelBuffer, Region};
pub use decode::load;
pub use error::{PipelineError, Result};
pub use filter::{apply_filter, ChannelFilter};
pub use pipeline::{
    process, run, run_and_show, run_batch, Display, DisplayError, Mode, PipelineConfig,
};
pub use transform::{crop, crop_with_offsets, to_gray, transpose, CropOffsets};
pub use validate::ValidationError;
