//! Single-channel drawing surface with clipped primitives.

use super::font::{self, ADVANCE, GLYPH_W};
use crate::buffer::PixelBuffer;

/// Mutable `(H, W)` drawing surface.
///
/// Coordinates are signed so that labels near an edge can start outside the
/// surface; anything drawn out of bounds is silently clipped.
pub(crate) struct Canvas {
    height: usize,
    width: usize,
    buffer: PixelBuffer,
}

impl Canvas {
    /// Create a surface filled with `background`.
    pub fn new(height: usize, width: usize, background: u8) -> Self {
        Self {
            height,
            width,
            buffer: PixelBuffer::filled(vec![height, width], background),
        }
    }

    /// Copy a rank-2 `source` with its top-left corner at `(row, col)`.
    ///
    /// The caller guarantees the source fits.
    pub fn blit(&mut self, source: &PixelBuffer, row: usize, col: usize) {
        let src_w = source.width();
        if src_w == 0 {
            return;
        }
        let data = self.buffer.as_mut_slice();
        for (y, src_row) in source.as_slice().chunks_exact(src_w).enumerate() {
            let start = (row + y) * self.width + col;
            data[start..start + src_w].copy_from_slice(src_row);
        }
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, value: u8) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buffer.as_mut_slice()[y as usize * self.width + x as usize] = value;
        }
    }

    /// Horizontal line on row `y` from `x0` to `x1` inclusive.
    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, value: u8) {
        for x in x0..=x1 {
            self.set_pixel(x, y, value);
        }
    }

    /// Vertical line on column `x` from `y0` to `y1` inclusive.
    pub fn vline(&mut self, x: i64, y0: i64, y1: i64, value: u8) {
        for y in y0..=y1 {
            self.set_pixel(x, y, value);
        }
    }

    /// Draw `text` with its left edge at `x` and its baseline at `baseline`.
    ///
    /// Glyphs occupy the rows just above the baseline, matching the usual
    /// bottom-left text origin.
    pub fn text(&mut self, x: i64, baseline: i64, text: &str, value: u8) {
        let (_, text_h) = font::text_size(text);
        let top = baseline - text_h as i64;
        for (i, ch) in text.chars().enumerate() {
            let Some(glyph) = font::glyph(ch) else {
                continue;
            };
            let gx = x + (i * ADVANCE) as i64;
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_W {
                    if font::is_set(bits, col) {
                        self.set_pixel(gx + col as i64, top + row as i64, value);
                    }
                }
            }
        }
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}
