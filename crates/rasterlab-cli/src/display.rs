//! Terminal rendering of pixel buffers.
//!
//! Buffers print as a shape line followed by a nested bracketed grid. Large
//! buffers are abbreviated to their first and last few entries along every
//! axis, with `...` standing in for the rest.

use std::io::Write;

use rasterlab_core::{Display, DisplayError, PixelBuffer};

/// Entries kept at each end of an abbreviated axis.
const EDGE_ITEMS: usize = 3;

/// Buffers with more samples than this are abbreviated.
const SUMMARY_THRESHOLD: usize = 1000;

/// [`Display`] that writes a text rendering to any writer.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn show(&mut self, title: &str, image: &PixelBuffer) -> Result<(), DisplayError> {
        let text = render(title, image);
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| DisplayError::Backend(e.to_string()))
    }
}

/// Title, shape, and sample grid of `image`.
pub fn render(title: &str, image: &PixelBuffer) -> String {
    format!(
        "{title}\nThe shape of image is: {}\n{}\n",
        format_shape(image.shape()),
        format_grid(image)
    )
}

/// Tuple-style shape, e.g. `(400, 400, 3)` or `(5,)`.
pub fn format_shape(shape: &[usize]) -> String {
    let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
    if dims.len() == 1 {
        format!("({},)", dims[0])
    } else {
        format!("({})", dims.join(", "))
    }
}

/// Nested bracketed grid of every sample, abbreviated when large.
pub fn format_grid(image: &PixelBuffer) -> String {
    let summarize = image.len() > SUMMARY_THRESHOLD;
    let width = image
        .as_slice()
        .iter()
        .max()
        .map_or(1, |v| v.to_string().len());
    let mut out = String::new();
    write_axis(&mut out, image.as_slice(), image.shape(), 0, summarize, width);
    out
}

/// Indices to print along an axis of length `len`; `None` marks the gap.
fn visible(len: usize, summarize: bool) -> Vec<Option<usize>> {
    if summarize && len > 2 * EDGE_ITEMS {
        (0..EDGE_ITEMS)
            .map(Some)
            .chain(std::iter::once(None))
            .chain((len - EDGE_ITEMS..len).map(Some))
            .collect()
    } else {
        (0..len).map(Some).collect()
    }
}

fn write_axis(
    out: &mut String,
    data: &[u8],
    shape: &[usize],
    depth: usize,
    summarize: bool,
    width: usize,
) {
    out.push('[');
    let Some((&len, rest)) = shape.split_first() else {
        out.push(']');
        return;
    };

    if rest.is_empty() {
        let cells: Vec<String> = visible(len, summarize)
            .into_iter()
            .map(|i| match i {
                Some(i) => format!("{:>width$}", data[i]),
                None => "...".to_string(),
            })
            .collect();
        out.push_str(&cells.join(" "));
    } else {
        let block: usize = rest.iter().product();
        let separator = format!("{}{}", "\n".repeat(rest.len()), " ".repeat(depth + 1));
        for (n, i) in visible(len, summarize).into_iter().enumerate() {
            if n > 0 {
                out.push_str(&separator);
            }
            match i {
                Some(i) => write_axis(
                    out,
                    &data[i * block..(i + 1) * block],
                    rest,
                    depth + 1,
                    summarize,
                    width,
                ),
                None => out.push_str("..."),
            }
        }
    }
    out.push(']');
}
