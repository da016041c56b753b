//! Matrix transpose of single-channel buffers.

use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::{PipelineError, Result};

/// Transpose an `(H, W)` buffer into a new `(W, H)` buffer.
///
/// Every sample is copied so that `out[j][i] == in[i][j]`; the result owns
/// its storage and can be annotated in place without affecting the input.
/// Callers holding `(H, W, 1)` data squeeze the channel axis first.
///
/// # Errors
///
/// Returns `PipelineError::EmptyInput` if the buffer has no samples and
/// `PipelineError::Dimension` if it is not rank 2.
pub fn transpose(buffer: &PixelBuffer) -> Result<PixelBuffer> {
    if buffer.is_empty() {
        return Err(PipelineError::EmptyInput(format!(
            "cannot transpose a buffer of shape {:?}",
            buffer.shape()
        )));
    }
    if buffer.rank() != 2 {
        return Err(PipelineError::Dimension(format!(
            "transpose: expected an (H, W) buffer, got {:?}",
            buffer.shape()
        )));
    }

    let (height, width) = (buffer.height(), buffer.width());
    let src = buffer.as_slice();
    let mut output = vec![0u8; height * width];

    for i in 0..height {
        for j in 0..width {
            output[j * height + i] = src[i * width + j];
        }
    }

    debug!("transpose [{height}, {width}] -> [{width}, {height}]");
    PixelBuffer::gray(width, height, output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
