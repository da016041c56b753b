//! Geometric and colorspace transforms: cropping, grayscale, and transpose.
//!
//! Each transform checks its preconditions before allocating anything and
//! returns a freshly owned [`PixelBuffer`](crate::PixelBuffer); inputs are
//! never mutated.
//!
//! # Transform Order
//!
//! The pipeline applies them in this order:
//! 1. Crop (offset square window)
//! 2. Grayscale conversion
//! 3. Transpose (rotate mode only, after squeezing the channel axis)
//!
//! # Coordinate System
//!
//! - Buffers are indexed `(row, col[, channel])`
//! - Origin is the top-left corner

mod crop;
mod gray;
mod transpose;

pub use crop::{crop, crop_region, crop_with_offsets, CropOffsets};
pub use gray::to_gray;
pub use transpose::transpose;
