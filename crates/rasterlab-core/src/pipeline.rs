//! Pipeline driver: load → crop → gray → (transpose) → annotate → display.
//!
//! The driver is single-shot. The first stage that fails aborts the run and
//! its error is returned unchanged; nothing is retried. Every run owns its
//! buffers, so runs over several files are independent of each other.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::annotate::{annotate_with, AxisSpec};
use crate::buffer::PixelBuffer;
use crate::decode::load;
use crate::error::Result;
use crate::transform::{crop_with_offsets, to_gray, transpose, CropOffsets};

/// Which transform sequence to run after grayscale conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Crop, gray, annotate.
    #[default]
    Zoom,
    /// Crop, gray, transpose, annotate.
    Rotate,
    /// Crop, gray, transpose; the bare transposed buffer is the result.
    Transpose,
}

/// Runtime configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub mode: Mode,
    /// Side of the square crop window.
    pub target_size: usize,
    pub offsets: CropOffsets,
    pub axes: AxisSpec,
    /// Window title handed to the display.
    pub title: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Zoom,
            target_size: 400,
            offsets: CropOffsets::default(),
            axes: AxisSpec::default(),
            title: "animal".to_string(),
        }
    }
}

/// Errors a display backend can report.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// The user interrupted the display (e.g. Ctrl+C).
    #[error("Display interrupted by user")]
    Interrupted,

    /// The backend failed to present the image.
    #[error("Display backend error: {0}")]
    Backend(String),
}

/// Something that can present a finished buffer to a user.
///
/// Implementations own any window or terminal resources and release them
/// before returning; the pipeline never runs an event loop itself.
pub trait Display {
    fn show(&mut self, title: &str, image: &PixelBuffer) -> std::result::Result<(), DisplayError>;
}

/// Run the post-load stages on an already decoded buffer.
pub fn process(image: PixelBuffer, config: &PipelineConfig) -> Result<PixelBuffer> {
    if config.mode != Mode::Transpose {
        config.axes.validate()?;
    }
    let cropped = crop_with_offsets(&image, config.target_size, config.offsets)?;
    drop(image);

    let gray = to_gray(cropped)?;
    debug!("gray stage produced {:?}", gray.shape());

    match config.mode {
        Mode::Zoom => annotate_with(&gray, &config.axes),
        Mode::Rotate => {
            let transposed = transpose(&gray.squeeze_channel())?;
            annotate_with(&transposed, &config.axes)
        }
        Mode::Transpose => transpose(&gray.squeeze_channel()),
    }
}

/// Load `path` and run the configured stages on it.
pub fn run(path: impl AsRef<Path>, config: &PipelineConfig) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let image = load(path)?;
    let output = process(image, config)?;
    info!(
        "{:?} pipeline on '{}' produced {:?}",
        config.mode,
        path.display(),
        output.shape()
    );
    Ok(output)
}

/// Run the pipeline and hand the result to `display`.
///
/// Display failures are logged and do not fail the run: the buffer was
/// produced, only presenting it went wrong.
pub fn run_and_show(
    path: impl AsRef<Path>,
    config: &PipelineConfig,
    display: &mut dyn Display,
) -> Result<PixelBuffer> {
    let output = run(path, config)?;
    if let Err(e) = display.show(&config.title, &output) {
        warn!("could not display '{}': {e}", config.title);
    }
    Ok(output)
}

/// Run each path independently, collecting one result per input.
pub fn run_batch<P: AsRef<Path>>(
    paths: &[P],
    config: &PipelineConfig,
) -> Vec<(PathBuf, Result<PixelBuffer>)> {
    paths
        .iter()
        .map(|p| {
            let path = p.as_ref().to_path_buf();
            let result = run(&path, config);
            if let Err(e) = &result {
                warn!("{}: {} {e}", path.display(), e.kind());
            }
            (path, result)
        })
        .collect()
}
