//! Image ingestion for rasterlab.
//!
//! This module provides functionality for:
//! - Checking a path against the supported raster extensions
//! - Identifying the container format from its leading bytes
//! - Decoding JPEG data to an `(H, W, 3)` RGB [`PixelBuffer`](crate::PixelBuffer)
//!
//! # Failure order
//!
//! Checks run from cheapest to most expensive and each maps to a distinct
//! error kind:
//! 1. Path extension not allow-listed → `Format`
//! 2. File missing, unreadable, or unidentifiable → `Decode`
//! 3. Embedded format tag not allow-listed (e.g. a renamed PNG) → `Format`
//! 4. Truncated or corrupted stream → `Decode`
//!
//! # Examples
//!
//! ```ignore
//! use rasterlab_core::decode::load;
//!
//! let image = load("animal.jpeg")?;
//! println!("Loaded {:?}", image.shape());
//! ```

mod jpeg;

pub use jpeg::{decode_jpeg, has_supported_extension, identify_format, load, SUPPORTED_EXTENSIONS};
