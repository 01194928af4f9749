//! Mock capture backend for testing
//!
//! This module provides a `MockBackend` implementation of the
//! [`ScreenCapture`] trait for testing and development purposes. The mock
//! backend generates synthetic test images without requiring access to a
//! real display server.
//!
//! # Features
//!
//! - **Synthetic Image Generation:** Creates test pattern frames at
//!   configurable dimensions
//! - **Error Injection:** Inject errors to test failure handling paths
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use screenshot_backup::capture::{MockBackend, ScreenCapture};
//!
//! let backend = MockBackend::new();
//! let image = backend.capture_display(None).unwrap();
//! assert_eq!(image.dimensions(), (1920, 1080));
//! ```
//!
//! ## With Error Injection
//!
//! ```
//! use screenshot_backup::{
//!     capture::{MockBackend, ScreenCapture},
//!     error::CaptureError,
//!     model::BackendType,
//! };
//!
//! let error = CaptureError::PermissionDenied {
//!     platform: "test".to_string(),
//!     backend:  BackendType::None,
//! };
//! let backend = MockBackend::new().with_error(error);
//!
//! assert!(backend.capture_display(None).is_err());
//! ```

use super::{ImageBuffer, ScreenCapture};
use crate::{
    error::{CaptureError, CaptureResult},
    model::BackendType,
};

/// Default frame dimensions for the mock backend
const DEFAULT_DIMENSIONS: (u32, u32) = (1920, 1080);

/// Mock capture backend for testing and development
///
/// Implements [`ScreenCapture`] without requiring access to a real display
/// server. Generates synthetic test-pattern frames.
#[derive(Debug)]
pub struct MockBackend {
    /// Dimensions of generated frames
    dimensions:      (u32, u32),
    /// Optional error to inject for testing failure handling
    error_injection: Option<CaptureError>,
}

impl MockBackend {
    /// Creates a new MockBackend producing 1920x1080 test frames
    pub fn new() -> Self {
        Self {
            dimensions:      DEFAULT_DIMENSIONS,
            error_injection: None,
        }
    }

    /// Sets the dimensions of generated frames
    ///
    /// # Examples
    ///
    /// ```
    /// use screenshot_backup::capture::{MockBackend, ScreenCapture};
    ///
    /// let backend = MockBackend::new().with_dimensions(640, 480);
    /// let image = backend.capture_display(None).unwrap();
    /// assert_eq!(image.dimensions(), (640, 480));
    /// ```
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = (width, height);
        self
    }

    /// Injects an error that will be returned by all capture operations
    ///
    /// Useful for testing failure handling paths without needing real
    /// error conditions.
    pub fn with_error(mut self, error: CaptureError) -> Self {
        self.error_injection = Some(error);
        self
    }

    /// Checks if an error should be injected
    ///
    /// `CaptureError` is not `Clone` (it may wrap `std::io::Error`), so
    /// injected errors are reconstructed variant by variant.
    fn check_error_injection(&self) -> CaptureResult<()> {
        if let Some(ref error) = self.error_injection {
            return Err(match error {
                CaptureError::BackendNotAvailable { backend } => {
                    CaptureError::BackendNotAvailable { backend: *backend }
                }
                CaptureError::PermissionDenied { platform, backend } => {
                    CaptureError::PermissionDenied {
                        platform: platform.clone(),
                        backend:  *backend,
                    }
                }
                CaptureError::CaptureFailed { backend, reason } => CaptureError::CaptureFailed {
                    backend: *backend,
                    reason:  reason.clone(),
                },
                CaptureError::CaptureTimeout { duration_ms } => CaptureError::CaptureTimeout {
                    duration_ms: *duration_ms,
                },
                CaptureError::InvalidParameter { parameter, reason } => {
                    CaptureError::InvalidParameter {
                        parameter: parameter.clone(),
                        reason:    reason.clone(),
                    }
                }
                CaptureError::EncodingFailed { format, reason } => CaptureError::EncodingFailed {
                    format: format.clone(),
                    reason: reason.clone(),
                },
                CaptureError::IoError(e) => {
                    CaptureError::IoError(std::io::Error::new(e.kind(), e.to_string()))
                }
                CaptureError::ImageError(msg) => CaptureError::ImageError(msg.clone()),
            });
        }
        Ok(())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenCapture for MockBackend {
    fn capture_display(&self, display_id: Option<u32>) -> CaptureResult<ImageBuffer> {
        self.check_error_injection()?;

        // The mock exposes a single display at index 0
        if let Some(id) = display_id {
            if id != 0 {
                return Err(CaptureError::InvalidParameter {
                    parameter: "display_id".to_string(),
                    reason:    format!("Mock backend has no display {}", id),
                });
            }
        }

        let (width, height) = self.dimensions;
        tracing::debug!("Mock capture: generating {}x{} test pattern", width, height);
        Ok(ImageBuffer::from_test_pattern(width, height))
    }

    fn backend_type(&self) -> BackendType {
        BackendType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_display_default_dimensions() {
        let backend = MockBackend::new();
        let image = backend.capture_display(None).unwrap();
        assert_eq!(image.dimensions(), (1920, 1080));
    }

    #[test]
    fn test_capture_display_custom_dimensions() {
        let backend = MockBackend::new().with_dimensions(800, 600);
        let image = backend.capture_display(None).unwrap();
        assert_eq!(image.dimensions(), (800, 600));
    }

    #[test]
    fn test_capture_display_primary_index() {
        let backend = MockBackend::new();
        let image = backend.capture_display(Some(0)).unwrap();
        assert_eq!(image.dimensions(), (1920, 1080));
    }

    #[test]
    fn test_capture_display_unknown_index() {
        let backend = MockBackend::new();
        let result = backend.capture_display(Some(3));

        assert!(matches!(
            result.unwrap_err(),
            CaptureError::InvalidParameter { .. }
        ));
    }

    #[test]
    fn test_error_injection() {
        let backend = MockBackend::new().with_error(CaptureError::PermissionDenied {
            platform: "test".to_string(),
            backend:  BackendType::None,
        });

        let result = backend.capture_display(None);
        assert!(matches!(
            result.unwrap_err(),
            CaptureError::PermissionDenied { .. }
        ));
    }

    #[test]
    fn test_error_injection_io_error() {
        let io_error = std::io::Error::other("disk full");
        let backend = MockBackend::new().with_error(CaptureError::IoError(io_error));

        let err = backend.capture_display(None).unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_backend_type() {
        let backend = MockBackend::new();
        assert_eq!(backend.backend_type(), BackendType::None);
    }
}
