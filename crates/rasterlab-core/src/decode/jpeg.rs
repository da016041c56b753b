//! JPEG loading with extension and container-tag validation.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageFormat, ImageReader};
use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::{PipelineError, Result};

/// File extensions accepted by [`load`] (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// Container formats accepted once the bytes have been identified.
const SUPPORTED_FORMATS: [ImageFormat; 1] = [ImageFormat::Jpeg];

/// Returns true if `path` ends in one of [`SUPPORTED_EXTENSIONS`].
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Load a JPEG file from disk as an `(H, W, 3)` RGB buffer.
///
/// # Errors
///
/// Returns `PipelineError::Format` if the extension is not `jpg`/`jpeg` or
/// the file content is some other format, `PipelineError::Decode` if the
/// file cannot be read or decoded, and `PipelineError::Internal` for
/// decoder failures that do not indicate a bad file.
pub fn load(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();

    if !has_supported_extension(path) {
        return Err(PipelineError::Format(format!(
            "'{}' is not a JPEG or JPG file",
            path.display()
        )));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        PipelineError::Decode(format!("cannot find or read '{}': {e}", path.display()))
    })?;

    let buffer = decode_jpeg(&bytes).map_err(|e| match e {
        PipelineError::Decode(msg) => {
            PipelineError::Decode(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })?;

    debug!("loaded '{}' with shape {:?}", path.display(), buffer.shape());
    Ok(buffer)
}

/// Identify the container format of `bytes` from its signature.
///
/// # Errors
///
/// Returns `PipelineError::Decode` if the bytes match no known format.
pub fn identify_format(bytes: &[u8]) -> Result<ImageFormat> {
    image::guess_format(bytes)
        .map_err(|_| PipelineError::Decode("cannot identify image data".to_string()))
}

/// Decode in-memory JPEG bytes to an `(H, W, 3)` RGB buffer.
///
/// Grayscale, palette, and alpha sources are all coerced to RGB.
///
/// # Errors
///
/// Returns `PipelineError::Decode` if the data cannot be identified or is
/// corrupted, and `PipelineError::Format` if it identifies as a format other
/// than JPEG.
pub fn decode_jpeg(bytes: &[u8]) -> Result<PixelBuffer> {
    let format = identify_format(bytes)?;
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(PipelineError::Format(format!(
            "content is {format:?}, not a JPEG image"
        )));
    }

    let reader = ImageReader::with_format(Cursor::new(bytes), format);
    let img = reader.decode().map_err(classify_decode_error)?;

    let rgb_img = img.into_rgb8();
    Ok(PixelBuffer::from_rgb_image(rgb_img))
}

/// Split decoder failures into bad-file (`Decode`) and everything else.
fn classify_decode_error(err: ImageError) -> PipelineError {
    match err {
        ImageError::Decoding(_) | ImageError::IoError(_) | ImageError::Unsupported(_) => {
            PipelineError::Decode(format!("corrupted or incomplete image: {err}"))
        }
        other => PipelineError::internal("load", other),
    }
}
