//! Per-channel color filters on `(H, W, 3)` buffers.
//!
//! Every filter keeps the input shape and returns a new buffer.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::Result;

/// Available channel filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelFilter {
    /// `255 - v` on every sample.
    Invert,
    /// Keep red, zero green and blue.
    Red,
    /// Keep green, zero red and blue.
    Green,
    /// Keep blue, zero red and green.
    Blue,
    /// Division-only grey, broadcast to all three channels.
    Grey,
}

impl ChannelFilter {
    pub const ALL: [ChannelFilter; 5] = [
        ChannelFilter::Invert,
        ChannelFilter::Red,
        ChannelFilter::Green,
        ChannelFilter::Blue,
        ChannelFilter::Grey,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChannelFilter::Invert => "invert",
            ChannelFilter::Red => "red",
            ChannelFilter::Green => "green",
            ChannelFilter::Blue => "blue",
            ChannelFilter::Grey => "grey",
        }
    }
}

/// Apply `filter` to an RGB buffer.
///
/// # Errors
///
/// Returns `PipelineError::Dimension` unless the buffer is `(H, W, 3)`.
pub fn apply_filter(buffer: &PixelBuffer, filter: ChannelFilter) -> Result<PixelBuffer> {
    buffer.require_rgb(filter.name())?;

    let src = buffer.as_slice();
    let mut out = vec![0u8; src.len()];

    match filter {
        ChannelFilter::Invert => {
            for (dst, &v) in out.iter_mut().zip(src) {
                *dst = 255 - v;
            }
        }
        ChannelFilter::Red => keep_channel(src, &mut out, 0),
        ChannelFilter::Green => keep_channel(src, &mut out, 1),
        ChannelFilter::Blue => keep_channel(src, &mut out, 2),
        ChannelFilter::Grey => {
            for (dst, px) in out.chunks_exact_mut(3).zip(src.chunks_exact(3)) {
                let g = division_grey(px[0], px[1], px[2]);
                dst.fill(g);
            }
        }
    }

    debug!("{} filter on {:?}", filter.name(), buffer.shape());
    PixelBuffer::new(buffer.shape().to_vec(), out)
}

fn keep_channel(src: &[u8], out: &mut [u8], channel: usize) {
    for (dst, px) in out.chunks_exact_mut(3).zip(src.chunks_exact(3)) {
        dst[channel] = px[channel];
    }
}

/// Mean of the channels each divided by three, truncated.
///
/// This is a third of the plain channel mean, so the result is a darkened
/// grey.
#[inline]
fn division_grey(r: u8, g: u8, b: u8) -> u8 {
    let thirds = [r as f64 / 3.0, g as f64 / 3.0, b as f64 / 3.0];
    (thirds.iter().sum::<f64>() / 3.0) as u8
}
