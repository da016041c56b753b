//! Owned pixel buffers and half-open regions.

use std::ops::Range;

use crate::error::{PipelineError, Result};

/// An owned n-dimensional array of 8-bit samples in row-major order.
///
/// Pipeline buffers are `(H, W)` for single-channel data or `(H, W, C)` with
/// `C = 3` for RGB and `C = 1` for gray data that keeps its channel axis.
/// Zero-sized axes are representable: a crop whose window falls outside the
/// source yields an empty buffer instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    shape: Vec<usize>,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from a shape and matching sample data.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Dimension` if the shape is rank 0 or the
    /// sample count does not equal the product of the shape.
    pub fn new(shape: Vec<usize>, data: Vec<u8>) -> Result<Self> {
        if shape.is_empty() {
            return Err(PipelineError::Dimension(
                "a buffer needs at least one axis".to_string(),
            ));
        }
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(PipelineError::Dimension(format!(
                "shape {:?} needs {} samples, got {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    /// Create a buffer of the given shape with every sample set to `value`.
    pub(crate) fn filled(shape: Vec<usize>, value: u8) -> Self {
        let len = shape.iter().product();
        Self {
            shape,
            data: vec![value; len],
        }
    }

    /// Create a single-channel `(H, W)` buffer.
    pub fn gray(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(vec![height, width], data)
    }

    /// Create a 3-channel `(H, W, 3)` buffer.
    pub fn rgb(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(vec![height, width, 3], data)
    }

    /// Create an `(H, W, 3)` buffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            shape: vec![height as usize, width as usize, 3],
            data: img.into_raw(),
        }
    }

    /// The buffer's shape, outermost axis first.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Size of axis 0 (rows).
    pub fn height(&self) -> usize {
        self.shape[0]
    }

    /// Size of axis 1 (columns), or 0 for rank-1 buffers.
    pub fn width(&self) -> usize {
        self.shape.get(1).copied().unwrap_or(0)
    }

    /// Number of samples per `(row, col)` position.
    pub fn channels(&self) -> usize {
        self.shape.iter().skip(2).product()
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw samples in row-major order.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw samples in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Sample at a full multi-axis index, or `None` when out of range.
    pub fn get(&self, index: &[usize]) -> Option<u8> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0usize;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }
        self.data.get(offset).copied()
    }

    /// The samples stored at `(row, col)` (all channels).
    ///
    /// Panics if the position is out of range.
    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        let c = self.channels();
        let start = (row * self.width() + col) * c;
        &self.data[start..start + c]
    }

    /// Drop a trailing singleton channel axis: `(H, W, 1)` becomes `(H, W)`.
    ///
    /// Any other shape is returned unchanged. Sample data is untouched.
    pub fn squeeze_channel(mut self) -> Self {
        if self.shape.len() == 3 && self.shape[2] == 1 {
            self.shape.pop();
        }
        self
    }

    /// Fail with `Dimension` unless the rank is 2 or 3.
    pub(crate) fn require_planar(&self, operation: &str) -> Result<()> {
        match self.rank() {
            2 | 3 => Ok(()),
            rank => Err(PipelineError::Dimension(format!(
                "{operation}: expected a rank 2 or 3 buffer, got rank {rank} {:?}",
                self.shape
            ))),
        }
    }

    /// Fail with `Dimension` unless the buffer has at least one row and column.
    pub(crate) fn require_nonempty_plane(&self, operation: &str) -> Result<()> {
        if self.rank() < 2 || self.height() < 1 || self.width() < 1 {
            return Err(PipelineError::Dimension(format!(
                "{operation}: image dimensions {:?} are too small",
                self.shape
            )));
        }
        Ok(())
    }

    /// Fail with `Dimension` unless the buffer is `(H, W, 3)`.
    pub(crate) fn require_rgb(&self, operation: &str) -> Result<()> {
        if self.rank() != 3 || self.shape[2] != 3 {
            return Err(PipelineError::Dimension(format!(
                "{operation}: expected an (H, W, 3) buffer, got {:?}",
                self.shape
            )));
        }
        Ok(())
    }
}

/// A rectangular selection `[start_row, end_row) x [start_col, end_col)`.
///
/// Regions follow half-open slice semantics: bounds past the buffer are
/// clamped and inverted ranges select nothing. Neither case is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl Region {
    pub fn new(start_row: usize, end_row: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    /// Clamp to a `height x width` plane so that `0 <= start <= end <= dim`.
    pub fn clamp_to(self, height: usize, width: usize) -> Self {
        let rows = half_open(self.start_row, self.end_row, height);
        let cols = half_open(self.start_col, self.end_col, width);
        Self {
            start_row: rows.start,
            end_row: rows.end,
            start_col: cols.start,
            end_col: cols.end,
        }
    }

    pub fn height(&self) -> usize {
        self.end_row.saturating_sub(self.start_row)
    }

    pub fn width(&self) -> usize {
        self.end_col.saturating_sub(self.start_col)
    }

    /// Copy the selected rows and columns of `buffer` into a new buffer.
    ///
    /// Axes after the second are carried over whole. The buffer must have
    /// rank 2 or more.
    pub fn extract(&self, buffer: &PixelBuffer) -> PixelBuffer {
        let region = self.clamp_to(buffer.height(), buffer.width());
        let pixel_len = buffer.channels();
        let src_stride = buffer.width() * pixel_len;
        let row_len = region.width() * pixel_len;

        let mut data = Vec::with_capacity(region.height() * row_len);
        for row in region.start_row..region.end_row {
            let start = row * src_stride + region.start_col * pixel_len;
            data.extend_from_slice(&buffer.as_slice()[start..start + row_len]);
        }

        let mut shape = buffer.shape().to_vec();
        shape[0] = region.height();
        shape[1] = region.width();
        PixelBuffer { shape, data }
    }
}

/// Clamp `[start, end)` to `[0, len)`; an inverted range becomes empty.
pub fn half_open(start: usize, end: usize, len: usize) -> Range<usize> {
    let start = start.min(len);
    let end = end.min(len).max(start);
    start..end
}
