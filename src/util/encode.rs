//! Image encoding utilities for screenshot capture
//!
//! This module encodes captured `ImageBuffer` frames into PNG byte arrays.
//! PNG is lossless; the only tunable is the compression level, traded
//! between encoding speed and file size.
//!
//! # Examples
//!
//! ```
//! use screenshot_backup::{capture::ImageBuffer, util::encode::encode_png};
//!
//! let img = ImageBuffer::from_test_pattern(100, 100);
//! let png_bytes = encode_png(&img).unwrap();
//! assert!(!png_bytes.is_empty());
//! ```

use std::io::Cursor;

use image::{
    ImageEncoder,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::{
    capture::ImageBuffer,
    error::{CaptureError, CaptureResult},
};

/// Encodes an image as PNG with default compression
///
/// Uses the default compression level and adaptive filtering for a good
/// balance between encoding speed and file size.
///
/// # Arguments
///
/// * `buffer` - The image to encode
///
/// # Returns
///
/// A vector of bytes containing the PNG-encoded image
pub fn encode_png(buffer: &ImageBuffer) -> CaptureResult<Vec<u8>> {
    encode_png_with_compression(buffer, CompressionType::Default)
}

/// Encodes an image as PNG with specified compression level
///
/// Allows fine-grained control over PNG compression. Higher compression
/// levels produce smaller files but take longer to encode.
///
/// # Arguments
///
/// * `buffer` - The image to encode
/// * `compression` - Compression level (Fast, Default, or Best)
pub fn encode_png_with_compression(
    buffer: &ImageBuffer,
    compression: CompressionType,
) -> CaptureResult<Vec<u8>> {
    let mut output = Vec::new();

    // Use adaptive filter for automatic per-scanline optimization
    let encoder =
        PngEncoder::new_with_quality(Cursor::new(&mut output), compression, FilterType::Adaptive);

    let rgba = buffer.to_rgba8();
    let (width, height) = rgba.dimensions();

    encoder
        .write_image(rgba.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| CaptureError::EncodingFailed {
            format: "png".to_string(),
            reason: e.to_string(),
        })?;

    Ok(output)
}
