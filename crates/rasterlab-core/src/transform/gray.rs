//! RGB to single-channel luminance conversion.

use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::luminance::luminance_u8;

/// Convert an `(H, W, 3)` buffer to `(H, W, 1)` luminance.
///
/// Any other rank 2 or 3 buffer is returned unchanged, so converting an
/// already-gray buffer is a no-op and `to_gray(to_gray(x)) == to_gray(x)`.
/// The channel axis is kept (size 1) rather than squeezed away.
///
/// # Errors
///
/// Returns `PipelineError::Dimension` if the rank is not 2 or 3.
pub fn to_gray(buffer: PixelBuffer) -> Result<PixelBuffer> {
    buffer.require_planar("to_gray")?;

    if buffer.rank() != 3 || buffer.channels() != 3 {
        return Ok(buffer);
    }

    let (height, width) = (buffer.height(), buffer.width());
    let gray: Vec<u8> = buffer
        .as_slice()
        .chunks_exact(3)
        .map(|px| luminance_u8(px[0], px[1], px[2]))
        .collect();

    debug!("to_gray {:?} -> [{height}, {width}, 1]", buffer.shape());
    PixelBuffer::new(vec![height, width, 1], gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    #[test]
    fn test_rgb_becomes_single_channel() {
        let rgb = PixelBuffer::rgb(
            1,
            3,
            vec![
                255, 0, 0, // Red
                0, 255, 0, // Green
                255, 255, 255, // White
            ],
        )
        .unwrap();

        let gray = to_gray(rgb).unwrap();
        assert_eq!(gray.shape(), &[1, 3, 1]);
        assert_eq!(gray.as_slice(), &[76, 149, 254]);
    }

    #[test]
    fn test_mixed_pixel_truncates() {
        // 0.2989*10 + 0.5870*20 + 0.1140*30 = 2.989 + 11.74 + 3.42 = 18.149
        let rgb = PixelBuffer::rgb(1, 1, vec![10, 20, 30]).unwrap();
        let gray = to_gray(rgb).unwrap();
        assert_eq!(gray.as_slice(), &[18]);
    }

    #[test]
    fn test_rank2_passthrough() {
        let gray = PixelBuffer::gray(2, 2, vec![1, 2, 3, 4]).unwrap();
        let out = to_gray(gray.clone()).unwrap();
        assert_eq!(out, gray);
    }

    #[test]
    fn test_single_channel_passthrough() {
        let gray = PixelBuffer::new(vec![2, 2, 1], vec![9, 8, 7, 6]).unwrap();
        let out = to_gray(gray.clone()).unwrap();
        assert_eq!(out, gray);
    }

    #[test]
    fn test_rgba_like_passthrough() {
        // Not three channels: left alone
        let four = PixelBuffer::new(vec![1, 1, 4], vec![1, 2, 3, 4]).unwrap();
        let out = to_gray(four.clone()).unwrap();
        assert_eq!(out, four);
    }

    #[test]
    fn test_rejects_rank_four() {
        let buf = PixelBuffer::new(vec![1, 1, 1, 3], vec![0; 3]).unwrap();
        let result = to_gray(buf);
        assert!(matches!(result, Err(PipelineError::Dimension(_))));
    }

    #[test]
    fn test_rejects_rank_one() {
        let buf = PixelBuffer::new(vec![3], vec![0; 3]).unwrap();
        assert!(matches!(to_gray(buf), Err(PipelineError::Dimension(_))));
    }

    #[test]
    fn test_empty_rgb_converts_to_empty_gray() {
        let buf = PixelBuffer::new(vec![4, 0, 3], vec![]).unwrap();
        let gray = to_gray(buf).unwrap();
        assert_eq!(gray.shape(), &[4, 0, 1]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rgb_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1usize..=12, 1usize..=12).prop_flat_map(|(h, w)| {
            prop::collection::vec(any::<u8>(), h * w * 3)
                .prop_map(move |data| PixelBuffer::rgb(h, w, data).unwrap())
        })
    }

    proptest! {
        /// Property: output has exactly one channel and floor-weighted samples.
        #[test]
        fn prop_matches_weighted_sum(rgb in rgb_strategy()) {
            let expected: Vec<u8> = rgb
                .as_slice()
                .chunks_exact(3)
                .map(|p| (0.2989 * p[0] as f64 + 0.5870 * p[1] as f64 + 0.1140 * p[2] as f64).floor() as u8)
                .collect();
            let (h, w) = (rgb.height(), rgb.width());

            let gray = to_gray(rgb).unwrap();
            prop_assert_eq!(gray.shape(), &[h, w, 1][..]);
            prop_assert_eq!(gray.as_slice(), &expected[..]);
        }

        /// Property: conversion is idempotent.
        #[test]
        fn prop_idempotent(rgb in rgb_strategy()) {
            let once = to_gray(rgb).unwrap();
            let twice = to_gray(once.clone()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
