//! Axis annotation: place a gray image on a white canvas with ruled,
//! ticked, and labelled X/Y axes.
//!
//! # Layout
//!
//! ```text
//!        margin        W
//!     +---------+----------------+
//!     |  labels |                |
//!     |   -|    |     source     |  H
//!     |    |    |                |
//!     +---------+----------------+
//!     |         |  '    '    '   |  margin
//!     |         |  0    50   100 |
//!     +---------+----------------+
//! ```
//!
//! The source occupies `[0:H, margin:margin+W]` and is never drawn over.
//! The X rule sits on row `H` and the Y rule on column `margin - 1`. Ticks
//! and labels are placed every `interval` pixels starting at 0.
//!
//! Label placement is pixel-exact: X labels are centered by subtracting half
//! the rendered text width from the tick column, and Y labels are centered
//! by adding half the rendered text height to the tick row (the label's
//! baseline).

mod canvas;
mod font;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::{PipelineError, Result};
use canvas::Canvas;

pub use font::text_size;

/// An annotated, enlarged `(H + margin, W + margin)` buffer.
pub type AnnotatedCanvas = PixelBuffer;

/// Layout constants for axis annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSpec {
    /// Width of the left and bottom margins.
    pub margin: usize,
    /// Length of each tick mark.
    pub tick_len: usize,
    /// Distance between ticks along both axes. Zero is treated as one.
    pub interval: usize,
    /// Color of rules, ticks, and labels.
    pub axis_color: u8,
    /// Canvas fill color.
    pub background: u8,
    /// Extra space between a tick and its label.
    pub label_gap: usize,
}

/// Largest margin, tick length, or label gap accepted by [`AxisSpec::validate`].
pub const MAX_LAYOUT_EXTENT: usize = u16::MAX as usize;

impl AxisSpec {
    /// Check that every length fits the drawing arithmetic.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Dimension` naming the first field above
    /// [`MAX_LAYOUT_EXTENT`].
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("margin", self.margin),
            ("tick_len", self.tick_len),
            ("label_gap", self.label_gap),
        ];
        for (name, value) in fields {
            if value > MAX_LAYOUT_EXTENT {
                return Err(PipelineError::Dimension(format!(
                    "annotate: axis {name} {value} exceeds {MAX_LAYOUT_EXTENT}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self {
            margin: 40,
            tick_len: 5,
            interval: 50,
            axis_color: 0,
            background: 255,
            label_gap: 2,
        }
    }
}

/// Annotate `buffer` with the default [`AxisSpec`].
///
/// # Errors
///
/// Returns `PipelineError::Dimension` if the buffer is not rank 2 or 3, has
/// a zero-sized row/column axis, or is rank 3 with more than one channel.
pub fn annotate(buffer: &PixelBuffer) -> Result<AnnotatedCanvas> {
    annotate_with(buffer, &AxisSpec::default())
}

/// Annotate `buffer` using an explicit layout.
///
/// # Errors
///
/// As [`annotate`], and also `PipelineError::Dimension` if the layout fails
/// [`AxisSpec::validate`] or the enlarged canvas size overflows.
pub fn annotate_with(buffer: &PixelBuffer, axes: &AxisSpec) -> Result<AnnotatedCanvas> {
    axes.validate()?;
    buffer.require_planar("annotate")?;
    buffer.require_nonempty_plane("annotate")?;
    if buffer.channels() != 1 {
        return Err(PipelineError::Dimension(format!(
            "annotate: expected a single-channel buffer, got {:?}",
            buffer.shape()
        )));
    }

    let (height, width) = (buffer.height(), buffer.width());
    let margin = axes.margin;
    let (canvas_h, canvas_w) = canvas_size(height, width, margin)?;

    // (H, W, 1) has the same sample layout as (H, W), so the blit squeezes
    let mut canvas = Canvas::new(canvas_h, canvas_w, axes.background);
    canvas.blit(buffer, 0, margin);

    draw_axes(&mut canvas, height, width, axes);

    debug!("annotate [{height}, {width}] -> [{canvas_h}, {canvas_w}]");
    Ok(canvas.into_buffer())
}

/// `(H + margin, W + margin)`, or `Dimension` if the canvas cannot be sized.
fn canvas_size(height: usize, width: usize, margin: usize) -> Result<(usize, usize)> {
    let overflow = || {
        PipelineError::Dimension(format!(
            "annotate: margin {margin} overflows a [{height}, {width}] canvas"
        ))
    };
    let canvas_h = height.checked_add(margin).ok_or_else(overflow)?;
    let canvas_w = width.checked_add(margin).ok_or_else(overflow)?;
    let area = canvas_h.checked_mul(canvas_w).ok_or_else(overflow)?;
    if i64::try_from(area).is_err() {
        return Err(overflow());
    }
    Ok((canvas_h, canvas_w))
}

fn draw_axes(canvas: &mut Canvas, height: usize, width: usize, axes: &AxisSpec) {
    let color = axes.axis_color;
    let h = height as i64;
    let w = width as i64;
    let m = axes.margin as i64;
    let tick = axes.tick_len as i64;
    let gap = axes.label_gap as i64;
    let step = axes.interval.max(1);

    // X rule below the image, Y rule left of it
    canvas.hline(m, m + w - 1, h, color);
    let y_rule = m - 1;
    canvas.vline(y_rule, 0, h - 1, color);

    for x in (0..width).step_by(step) {
        let px = m + x as i64;
        canvas.vline(px, h, h + tick, color);

        let label = x.to_string();
        let (text_w, text_h) = text_size(&label);
        let text_x = px - (text_w / 2) as i64;
        let text_y = h + tick + text_h as i64 + gap;
        canvas.text(text_x, text_y, &label, color);
    }

    for y in (0..height).step_by(step) {
        let py = y as i64;
        canvas.hline(y_rule - tick, y_rule, py, color);

        let label = y.to_string();
        let (text_w, text_h) = text_size(&label);
        let text_x = y_rule - tick - text_w as i64 - gap;
        let text_y = py + (text_h / 2) as i64;
        canvas.text(text_x, text_y, &label, color);
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
