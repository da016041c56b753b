//! Luminance weights for grayscale conversion.
//!
//! The weights are the ITU-R BT.601 luma coefficients as commonly rounded to
//! four decimals. They sum to 0.9999, so pure white maps to 254 after
//! truncation; that is the expected output, not an off-by-one.

/// Weight of the red channel.
pub const LUMA_R: f64 = 0.2989;

/// Weight of the green channel.
pub const LUMA_G: f64 = 0.5870;

/// Weight of the blue channel.
pub const LUMA_B: f64 = 0.1140;

/// Weighted luminance of an RGB sample, before narrowing.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

/// Luminance of an RGB sample truncated to `u8` (narrowing, not rounding).
#[inline]
pub fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    luminance(r, g, b) as u8
}
