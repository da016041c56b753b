//! Offset square cropping.
//!
//! The crop window is a square of side `min(target, H, W)` placed near the
//! image center, then shifted up by `offsets.row` and right by `offsets.col`.
//! The shift keeps the subject of the expected input photos inside the
//! window; with zero offsets the crop is a plain center crop.
//!
//! # Window
//!
//! ```text
//! start_row = max(0, (H - size) / 2 - offsets.row)
//! start_col = max(0, (W - size) / 2 + offsets.col)
//! end       = start + size
//! ```
//!
//! The window is then clamped with half-open slice semantics, so a window
//! that runs past the right edge yields a narrower (possibly empty) result.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, Region};
use crate::error::Result;

/// Row/column shift applied to the centered crop window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropOffsets {
    /// Pixels to move the window up from center.
    pub row: usize,
    /// Pixels to move the window right from center.
    pub col: usize,
}

impl Default for CropOffsets {
    fn default() -> Self {
        Self { row: 85, col: 135 }
    }
}

impl CropOffsets {
    /// No shift: a true center crop.
    pub const CENTERED: CropOffsets = CropOffsets { row: 0, col: 0 };
}

/// Compute the (unclamped) crop window for a `height x width` plane.
pub fn crop_region(height: usize, width: usize, target: usize, offsets: CropOffsets) -> Region {
    let size = target.min(height).min(width);

    let start_row = ((height - size) / 2).saturating_sub(offsets.row);
    let start_col = ((width - size) / 2).saturating_add(offsets.col);

    // Saturated windows land past the edge and clamp to empty
    Region::new(
        start_row,
        start_row.saturating_add(size),
        start_col,
        start_col.saturating_add(size),
    )
}

/// Crop `buffer` to a square of side `min(target, H, W)` using the default
/// offsets.
///
/// # Errors
///
/// Returns `PipelineError::Dimension` if the buffer has fewer than two axes
/// or a zero-sized row/column axis.
pub fn crop(buffer: &PixelBuffer, target: usize) -> Result<PixelBuffer> {
    crop_with_offsets(buffer, target, CropOffsets::default())
}

/// Crop `buffer` with explicit offsets. Trailing axes are preserved.
pub fn crop_with_offsets(
    buffer: &PixelBuffer,
    target: usize,
    offsets: CropOffsets,
) -> Result<PixelBuffer> {
    buffer.require_nonempty_plane("crop")?;

    let region = crop_region(buffer.height(), buffer.width(), target, offsets);
    let output = region.extract(buffer);

    debug!(
        "crop {:?} -> {:?} (window rows {}..{}, cols {}..{})",
        buffer.shape(),
        output.shape(),
        region.start_row,
        region.end_row,
        region.start_col,
        region.end_col
    );
    if output.is_empty() {
        warn!(
            "crop window cols {}..{} lies outside a {}-pixel-wide image",
            region.start_col,
            region.end_col,
            buffer.width()
        );
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    /// Create a test image where each pixel encodes its position.
    fn test_image(height: usize, width: usize, channels: usize) -> PixelBuffer {
        let mut data = Vec::with_capacity(height * width * channels);
        for i in 0..height * width {
            data.extend(std::iter::repeat((i % 256) as u8).take(channels));
        }
        PixelBuffer::new(vec![height, width, channels], data).unwrap()
    }

    fn gray_image(height: usize, width: usize) -> PixelBuffer {
        let data = (0..height * width).map(|i| (i % 256) as u8).collect();
        PixelBuffer::gray(height, width, data).unwrap()
    }

    #[test]
    fn test_default_offsets() {
        let offsets = CropOffsets::default();
        assert_eq!(offsets.row, 85);
        assert_eq!(offsets.col, 135);
    }

    #[test]
    fn test_window_for_500_square() {
        // (500 - 400) / 2 = 50; rows: max(0, 50 - 85) = 0, cols: 50 + 135 = 185
        let region = crop_region(500, 500, 400, CropOffsets::default());
        assert_eq!(region, Region::new(0, 400, 185, 585));
    }

    #[test]
    fn test_crop_500_square_clamps_right_edge() {
        let img = test_image(500, 500, 3);
        let out = crop(&img, 400).unwrap();

        // Columns 185..585 clamp to 185..500
        assert_eq!(out.shape(), &[400, 315, 3]);
        assert_eq!(out.pixel(0, 0), img.pixel(0, 185));
        assert_eq!(out.pixel(399, 314), img.pixel(399, 499));
    }

    #[test]
    fn test_crop_large_image_is_full_square() {
        let img = test_image(1000, 1000, 3);
        let out = crop(&img, 400).unwrap();

        // rows: 300 - 85 = 215, cols: 300 + 135 = 435
        assert_eq!(out.shape(), &[400, 400, 3]);
        assert_eq!(out.pixel(0, 0), img.pixel(215, 435));
        assert_eq!(out.pixel(10, 20), img.pixel(225, 455));
    }

    #[test]
    fn test_crop_centered() {
        let img = gray_image(10, 10);
        let out = crop_with_offsets(&img, 4, CropOffsets::CENTERED).unwrap();

        assert_eq!(out.shape(), &[4, 4]);
        // Window starts at (3, 3): value 33
        assert_eq!(out.as_slice()[0], 33);
        assert_eq!(out.as_slice()[15], 66);
    }

    #[test]
    fn test_crop_small_image_collapses_to_empty() {
        // size = 100, start_col = 0 + 135 which is past the right edge
        let img = test_image(100, 100, 3);
        let out = crop(&img, 400).unwrap();

        assert_eq!(out.shape(), &[100, 0, 3]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_crop_target_larger_than_image() {
        let img = gray_image(30, 50);
        let out = crop_with_offsets(&img, 400, CropOffsets::CENTERED).unwrap();

        // size = min(400, 30, 50) = 30, cols start at (50 - 30) / 2 = 10
        assert_eq!(out.shape(), &[30, 30]);
        assert_eq!(out.as_slice()[0], 10);
    }

    #[test]
    fn test_crop_preserves_channel_axis() {
        let img = test_image(20, 20, 1);
        let out = crop_with_offsets(&img, 8, CropOffsets::CENTERED).unwrap();
        assert_eq!(out.shape(), &[8, 8, 1]);
    }

    #[test]
    fn test_crop_rejects_zero_dimension() {
        let img = PixelBuffer::new(vec![0, 10, 3], vec![]).unwrap();
        let result = crop(&img, 5);
        assert!(matches!(result, Err(PipelineError::Dimension(_))));
    }

    #[test]
    fn test_crop_rejects_rank_one() {
        let img = PixelBuffer::new(vec![10], vec![0; 10]).unwrap();
        let result = crop(&img, 5);
        assert!(matches!(result, Err(PipelineError::Dimension(_))));
    }

    #[test]
    fn test_crop_does_not_touch_input() {
        let img = test_image(600, 600, 3);
        let before = img.clone();
        let _ = crop(&img, 400).unwrap();
        assert_eq!(img, before);
    }

    #[test]
    fn test_extreme_offsets_clamp_instead_of_overflowing() {
        let offsets: CropOffsets =
            serde_json::from_str(r#"{"row": 18446744073709551615, "col": 18446744073709551615}"#)
                .unwrap();
        assert_eq!(offsets, CropOffsets { row: usize::MAX, col: usize::MAX });

        let region = crop_region(10, 10, 4, offsets);
        assert_eq!(region.start_row, 0);
        assert_eq!(region.start_col, usize::MAX);
        assert_eq!(region.end_col, usize::MAX);

        // Rows: 0..4 (row shift saturates at the top); cols: past the edge
        let out = crop_with_offsets(&test_image(10, 10, 3), 4, offsets).unwrap();
        assert_eq!(out.shape(), &[4, 0, 3]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_offsets_deserialize_with_defaults() {
        let offsets: CropOffsets = serde_json::from_str(r#"{"col": 10}"#).unwrap();
        assert_eq!(offsets, CropOffsets { row: 85, col: 10 });
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_image(height: usize, width: usize) -> PixelBuffer {
        let data = (0..height * width * 3).map(|i| (i % 256) as u8).collect();
        PixelBuffer::rgb(height, width, data).unwrap()
    }

    proptest! {
        /// Property: output never exceeds min(target, H, W) on either axis.
        #[test]
        fn prop_output_bounded_by_effective_size(
            height in 1usize..=120,
            width in 1usize..=120,
            target in 1usize..=150,
            row in 0usize..=200,
            col in 0usize..=200,
        ) {
            let img = create_test_image(height, width);
            let out = crop_with_offsets(&img, target, CropOffsets { row, col }).unwrap();
            let size = target.min(height).min(width);

            prop_assert!(out.height() <= size);
            prop_assert!(out.width() <= size);
            prop_assert_eq!(out.channels(), 3);
        }

        /// Property: any offset, however large, yields a clamped window.
        #[test]
        fn prop_any_offsets_stay_in_bounds(
            height in 1usize..=40,
            width in 1usize..=40,
            target in 1usize..=50,
            row in any::<usize>(),
            col in any::<usize>(),
        ) {
            let img = create_test_image(height, width);
            let out = crop_with_offsets(&img, target, CropOffsets { row, col }).unwrap();
            prop_assert!(out.width() <= width);
            prop_assert_eq!(out.height(), target.min(height).min(width));
        }

        /// Property: the row window always fits, so the height is exact.
        #[test]
        fn prop_height_is_effective_size(
            height in 1usize..=120,
            width in 1usize..=120,
            target in 1usize..=150,
            row in 0usize..=200,
        ) {
            let img = create_test_image(height, width);
            let out = crop_with_offsets(&img, target, CropOffsets { row, col: 0 }).unwrap();
            prop_assert_eq!(out.height(), target.min(height).min(width));
        }

        /// Property: with zero offsets the crop is a full square.
        #[test]
        fn prop_centered_crop_is_square(
            height in 1usize..=120,
            width in 1usize..=120,
            target in 1usize..=150,
        ) {
            let img = create_test_image(height, width);
            let out = crop_with_offsets(&img, target, CropOffsets::CENTERED).unwrap();
            let size = target.min(height).min(width);
            prop_assert_eq!(out.shape(), &[size, size, 3][..]);
        }

        /// Property: every cropped pixel equals the source pixel it came from.
        #[test]
        fn prop_pixels_come_from_window(
            height in 1usize..=60,
            width in 1usize..=60,
            target in 1usize..=60,
            row in 0usize..=30,
            col in 0usize..=30,
        ) {
            let img = create_test_image(height, width);
            let offsets = CropOffsets { row, col };
            let out = crop_with_offsets(&img, target, offsets).unwrap();
            let region = crop_region(height, width, target, offsets);

            for y in 0..out.height() {
                for x in 0..out.width() {
                    prop_assert_eq!(
                        out.pixel(y, x),
                        img.pixel(region.start_row + y, region.start_col + x)
                    );
                }
            }
        }
    }
}
