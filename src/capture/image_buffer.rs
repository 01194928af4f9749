//! Image buffer wrapper for captured frames
//!
//! This module provides an `ImageBuffer` wrapper around
//! `image::DynamicImage` carrying one captured frame from the capture call
//! to the encode-and-save step.
//!
//! # Examples
//!
//! ```
//! use screenshot_backup::capture::ImageBuffer;
//!
//! let img = ImageBuffer::from_test_pattern(1920, 1080);
//! assert_eq!(img.dimensions(), (1920, 1080));
//! ```

use image::GenericImageView;

/// Wrapper around `image::DynamicImage` holding one captured frame
///
/// The buffer is created by a capture backend, handed to the PNG encoder,
/// and then dropped; nothing retains it past the save.
#[derive(Clone, Debug)]
pub struct ImageBuffer {
    inner: image::DynamicImage,
}

impl ImageBuffer {
    /// Creates a new ImageBuffer from a DynamicImage
    pub fn new(image: image::DynamicImage) -> Self {
        Self { inner: image }
    }

    /// Returns the dimensions of the image as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    /// Returns the image width in pixels
    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    /// Returns the image height in pixels
    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    /// Converts the image to RGBA8 format
    ///
    /// Returns an `ImageBuffer<Rgba<u8>, Vec<u8>>` suitable for encoding.
    pub fn to_rgba8(&self) -> image::ImageBuffer<image::Rgba<u8>, Vec<u8>> {
        self.inner.to_rgba8()
    }

    /// Returns a reference to the raw pixel data as bytes
    ///
    /// The byte layout depends on the underlying image format. For a
    /// predictable layout, convert with `to_rgba8()` first.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    /// Creates a test pattern image with the specified dimensions
    ///
    /// Generates a vertical gradient from blue (top) to cyan (bottom),
    /// useful for testing without a real capture backend.
    pub fn from_test_pattern(width: u32, height: u32) -> Self {
        use image::{ImageBuffer as ImgBuf, Rgba};

        let start_color = Rgba([0u8, 0u8, 255u8, 255u8]); // Blue
        let end_color = Rgba([0u8, 255u8, 255u8, 255u8]); // Cyan

        let img = ImgBuf::from_fn(width, height, |_x, y| {
            let ratio = y as f32 / height.max(1) as f32;
            Rgba([
                (start_color[0] as f32 * (1.0 - ratio) + end_color[0] as f32 * ratio) as u8,
                (start_color[1] as f32 * (1.0 - ratio) + end_color[1] as f32 * ratio) as u8,
                (start_color[2] as f32 * (1.0 - ratio) + end_color[2] as f32 * ratio) as u8,
                255,
            ])
        });

        Self::new(image::DynamicImage::ImageRgba8(img))
    }

    /// Returns a reference to the inner DynamicImage
    pub fn inner(&self) -> &image::DynamicImage {
        &self.inner
    }

    /// Consumes self and returns the inner DynamicImage
    pub fn into_inner(self) -> image::DynamicImage {
        self.inner
    }
}
