//! X11 capture backend using xcap
//!
//! This module implements display capture for X11 display servers (and
//! XWayland sessions) via the xcap library.
//!
//! # X11 Security Model
//!
//! X11 allows direct screen capture without explicit user permission, so a
//! one-shot unattended capture needs no consent dialog.
//!
//! # Examples
//!
//! ```rust,ignore
//! use screenshot_backup::capture::{ScreenCapture, X11Backend};
//!
//! let backend = X11Backend::new().unwrap();
//! let image = backend.capture_display(None).unwrap();
//! println!("Captured {}x{}", image.width(), image.height());
//! ```

use super::{ImageBuffer, ScreenCapture};
use crate::{
    error::{CaptureError, CaptureResult},
    model::BackendType,
};

/// X11 display capture backend using xcap
///
/// Stateless: xcap opens its own connection to the X server for each
/// capture, so the backend carries no fields.
#[derive(Debug)]
pub struct X11Backend {
    _private: (),
}

impl X11Backend {
    /// Creates a new X11Backend instance
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::BackendNotAvailable`] when `$DISPLAY` is
    /// not set.
    pub fn new() -> CaptureResult<Self> {
        // Check if $DISPLAY is set
        if std::env::var("DISPLAY").is_err() {
            return Err(CaptureError::BackendNotAvailable {
                backend: BackendType::X11,
            });
        }

        Ok(Self { _private: () })
    }

    /// Maps xcap errors to CaptureError
    ///
    /// Distinguishes permission problems and missing-display problems from
    /// generic capture failures so the printed message stays actionable.
    fn map_xcap_error(e: xcap::XCapError) -> CaptureError {
        let err_str = e.to_string().to_lowercase();

        if err_str.contains("permission denied") || err_str.contains("access denied") {
            tracing::warn!("xcap permission denied - check X11 security restrictions");
            return CaptureError::PermissionDenied {
                platform: "linux".to_string(),
                backend:  BackendType::X11,
            };
        }

        if err_str.contains("display") || err_str.contains("connection") {
            tracing::warn!("xcap failed to reach the X11 display - verify DISPLAY is set");
            return CaptureError::BackendNotAvailable {
                backend: BackendType::X11,
            };
        }

        CaptureError::CaptureFailed {
            backend: BackendType::X11,
            reason:  e.to_string(),
        }
    }
}

impl ScreenCapture for X11Backend {
    /// Captures a screenshot of an entire display
    ///
    /// Enumerates monitors via xcap and captures the requested one. With
    /// `display_id: None` the first monitor reported by the server is used
    /// as the primary display.
    fn capture_display(&self, display_id: Option<u32>) -> CaptureResult<ImageBuffer> {
        tracing::debug!("X11 capture_display (display_id={:?})", display_id);

        let monitors = xcap::Monitor::all().map_err(Self::map_xcap_error)?;

        if monitors.is_empty() {
            tracing::error!("No monitors available for capture");
            return Err(CaptureError::BackendNotAvailable {
                backend: BackendType::X11,
            });
        }

        let monitor_count = monitors.len();
        let monitor = match display_id {
            None => monitors.into_iter().next().ok_or(CaptureError::BackendNotAvailable {
                backend: BackendType::X11,
            })?,
            Some(id) => monitors.into_iter().nth(id as usize).ok_or_else(|| {
                tracing::error!("Monitor {} not found ({} attached)", id, monitor_count);
                CaptureError::InvalidParameter {
                    parameter: "display_id".to_string(),
                    reason:    format!("Monitor {} not found", id),
                }
            })?,
        };

        let image = monitor.capture_image().map_err(Self::map_xcap_error)?;

        tracing::info!("Captured display: {}x{}", image.width(), image.height());

        Ok(ImageBuffer::new(image::DynamicImage::ImageRgba8(image)))
    }

    fn backend_type(&self) -> BackendType {
        BackendType::X11
    }
}
