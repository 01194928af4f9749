//! Capture backend traits and implementations
//!
//! This module provides the core abstractions for display capture across
//! different platforms. It includes:
//!
//! - `ImageBuffer`: A wrapper around `image::DynamicImage` holding one
//!   captured frame
//! - `ScreenCapture`: Trait defining the interface for capture backends
//! - Backend implementations for X11 and Windows, plus a mock backend for
//!   testing without a display server

use crate::{error::CaptureResult, model::BackendType};

pub mod image_buffer;
pub mod mock;

#[cfg(target_os = "linux")]
pub mod x11_backend;

#[cfg(target_os = "windows")]
pub mod windows_backend;

pub use image_buffer::ImageBuffer;
pub use mock::MockBackend;
#[cfg(target_os = "windows")]
pub use windows_backend::WindowsBackend;
#[cfg(target_os = "linux")]
pub use x11_backend::X11Backend;

/// Core trait for display capture backends
///
/// `ScreenCapture` defines the interface that all platform-specific
/// backends must implement. The trait is synchronous: the backup routine
/// runs start-to-finish without yielding, and both platform capture
/// libraries expose blocking calls.
///
/// All implementations must be thread-safe (`Send + Sync`) so backends can
/// be shared behind trait objects.
pub trait ScreenCapture: Send + Sync {
    /// Captures a screenshot of an entire display
    ///
    /// If `display_id` is `None`, captures the primary display.
    ///
    /// # Errors
    ///
    /// - [`CaptureError::BackendNotAvailable`](crate::error::CaptureError::BackendNotAvailable)
    ///   - No display server reachable
    /// - [`CaptureError::PermissionDenied`](crate::error::CaptureError::PermissionDenied)
    ///   - System denies screen capture
    /// - [`CaptureError::CaptureFailed`](crate::error::CaptureError::CaptureFailed)
    ///   - Platform capture library reported a failure
    /// - [`CaptureError::InvalidParameter`](crate::error::CaptureError::InvalidParameter)
    ///   - `display_id` does not name an attached display
    fn capture_display(&self, display_id: Option<u32>) -> CaptureResult<ImageBuffer>;

    /// Returns the backend type, for diagnostics
    fn backend_type(&self) -> BackendType;
}

/// Creates a default capture backend for the current platform
///
/// - **Linux/X11** (including XWayland sessions with `DISPLAY` set): uses
///   [`X11Backend`]
/// - **Windows**: uses `WindowsBackend`
/// - **Linux Wayland-only, macOS, headless**: returns a structured
///   [`CaptureError::BackendNotAvailable`](crate::error::CaptureError::BackendNotAvailable)
///   error
pub fn create_default_backend() -> CaptureResult<Box<dyn ScreenCapture>> {
    let platform = crate::util::detect::detect_platform();
    tracing::debug!("Detected platform: {} ({})", platform.os, platform.backend);

    match platform.backend {
        #[cfg(target_os = "linux")]
        BackendType::X11 => Ok(Box::new(X11Backend::new()?)),
        #[cfg(target_os = "windows")]
        BackendType::Windows => Ok(Box::new(WindowsBackend::new()?)),
        other => Err(crate::error::CaptureError::BackendNotAvailable { backend: other }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_backend_is_object_safe() {
        let backend: Box<dyn ScreenCapture> = Box::new(MockBackend::new());
        assert_eq!(backend.backend_type(), BackendType::None);

        let image = backend.capture_display(None).unwrap();
        assert_eq!(image.dimensions(), (1920, 1080));
    }

    #[test]
    fn test_create_default_backend_matches_detection() {
        use crate::{error::CaptureError, util::detect::detect_platform};

        let platform = detect_platform();
        let result = create_default_backend();

        match platform.backend {
            BackendType::X11 | BackendType::Windows => {
                assert!(result.is_ok(), "expected a backend for {}", platform.backend);
            }
            other => {
                let err = result.unwrap_err();
                assert!(matches!(
                    err,
                    CaptureError::BackendNotAvailable { backend } if backend == other
                ));
            }
        }
    }
}
