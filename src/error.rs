//! Error types for screenshot capture operations
//!
//! This module defines the error types surfaced by the capture and save
//! pipeline, with user-facing messages and actionable remediation hints.
//! Each error provides context about what went wrong and suggests next
//! steps for resolution.

use crate::model::BackendType;

/// Result type alias for capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Error type for screenshot capture and save operations
///
/// Each variant includes detailed context and provides remediation hints
/// through the `remediation_hint()` method.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// Requested backend is not available
    #[error("Backend {backend} is not available on this platform")]
    BackendNotAvailable {
        /// Backend type that's unavailable
        backend: BackendType,
    },

    /// Permission denied for capture operation
    #[error("Permission denied for screenshot capture on {platform}")]
    PermissionDenied {
        /// Platform where permission was denied
        platform: String,
        /// Backend that denied permission
        backend: BackendType,
    },

    /// Display capture failed inside the platform capture library
    #[error("Display capture failed on {backend}: {reason}")]
    CaptureFailed {
        /// Backend that attempted the capture
        backend: BackendType,
        /// Reason reported by the capture library
        reason: String,
    },

    /// Capture operation timed out
    #[error("Capture operation timed out after {duration_ms}ms")]
    CaptureTimeout {
        /// Timeout duration in milliseconds
        duration_ms: u64,
    },

    /// Invalid parameter provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: String,
        /// Reason why it's invalid
        reason: String,
    },

    /// Image encoding failed
    #[error("Failed to encode image as {format}: {reason}")]
    EncodingFailed {
        /// Image format that failed
        format: String,
        /// Reason for encoding failure
        reason: String,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    ImageError(String),
}

impl CaptureError {
    /// Returns an actionable remediation hint for this error
    ///
    /// Provides platform-specific guidance and next steps for users
    /// to resolve the error condition.
    pub fn remediation_hint(&self) -> &str {
        match self {
            CaptureError::BackendNotAvailable { backend } => match backend {
                BackendType::Wayland => {
                    "Wayland sessions require an interactive screen-sharing consent dialog, which \
                     this one-shot tool cannot service. Run under X11 or XWayland (ensure DISPLAY \
                     is set)."
                }
                BackendType::X11 => {
                    "X11 backend not available. Ensure you're running in an X11 session with the \
                     DISPLAY environment variable set."
                }
                BackendType::Windows => "Windows backend only available on Windows OS.",
                BackendType::MacOS => "macOS display capture is not supported by this tool.",
                BackendType::None => {
                    "No display backend detected. Run inside a graphical session (X11 on Linux, \
                     or Windows)."
                }
            },
            CaptureError::PermissionDenied { backend, .. } => match backend {
                BackendType::X11 => {
                    "Ensure your X11 server allows screen capture. Check xhost settings if running \
                     in a restricted environment."
                }
                BackendType::Windows => {
                    "Grant screen recording permission in Windows Settings > Privacy > Screen \
                     recording. Ensure the application has necessary privileges."
                }
                _ => "Grant screenshot permission for this session and retry.",
            },
            CaptureError::CaptureFailed { .. } => {
                "The platform capture library reported a failure. Verify a display is attached \
                 and the session is active, then retry."
            }
            CaptureError::CaptureTimeout { .. } => {
                "The capture operation took too long. This may indicate an unresponsive desktop \
                 session or GPU scheduling delays. Retry the capture."
            }
            CaptureError::InvalidParameter { parameter, .. } => match parameter.as_str() {
                "display_id" => "Use a display index reported by the platform (0 = primary).",
                _ => "Check the parameter value against the API documentation.",
            },
            CaptureError::EncodingFailed { .. } => {
                "PNG encoding failed. Ensure the captured frame has nonzero dimensions and \
                 enough memory is available."
            }
            CaptureError::IoError(_) => {
                "An I/O error occurred. Check file permissions, disk space, and system resources."
            }
            CaptureError::ImageError(_) => {
                "Image processing failed. Ensure the frame data is valid and the requested \
                 operations are supported."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_not_available_error_message() {
        let error = CaptureError::BackendNotAvailable {
            backend: BackendType::X11,
        };

        let msg = error.to_string();
        assert!(msg.contains("x11"));
        assert!(msg.contains("not available"));
    }

    #[test]
    fn test_backend_not_available_x11_remediation() {
        let error = CaptureError::BackendNotAvailable {
            backend: BackendType::X11,
        };

        let hint = error.remediation_hint();
        assert!(hint.contains("DISPLAY"));
    }

    #[test]
    fn test_backend_not_available_wayland_remediation() {
        let error = CaptureError::BackendNotAvailable {
            backend: BackendType::Wayland,
        };

        let hint = error.remediation_hint();
        assert!(hint.contains("XWayland"));
    }

    #[test]
    fn test_permission_denied_windows() {
        let error = CaptureError::PermissionDenied {
            platform: "windows".to_string(),
            backend:  BackendType::Windows,
        };

        let msg = error.to_string();
        assert!(msg.contains("Permission denied"));
        assert!(msg.contains("windows"));

        let hint = error.remediation_hint();
        assert!(hint.contains("Windows Settings"));
        assert!(hint.contains("Screen"));
    }

    #[test]
    fn test_capture_failed_error_message() {
        let error = CaptureError::CaptureFailed {
            backend: BackendType::X11,
            reason:  "connection reset".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("Display capture failed"));
        assert!(msg.contains("connection reset"));
    }

    #[test]
    fn test_capture_timeout_error_message() {
        let error = CaptureError::CaptureTimeout { duration_ms: 2000 };

        let msg = error.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("2000"));
    }

    #[test]
    fn test_invalid_parameter_display_id() {
        let error = CaptureError::InvalidParameter {
            parameter: "display_id".to_string(),
            reason:    "monitor 7 not found".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("Invalid parameter"));
        assert!(msg.contains("display_id"));

        let hint = error.remediation_hint();
        assert!(hint.contains("display index"));
    }

    #[test]
    fn test_encoding_failed_error_message() {
        let error = CaptureError::EncodingFailed {
            format: "png".to_string(),
            reason: "encoder not available".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("Failed to encode"));
        assert!(msg.contains("png"));
        assert!(msg.contains("encoder not available"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: CaptureError = io_error.into();

        let msg = error.to_string();
        assert!(msg.contains("I/O error"));
    }

    #[test]
    fn test_io_error_remediation() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: CaptureError = io_error.into();

        let hint = error.remediation_hint();
        assert!(hint.contains("permissions"));
        assert!(hint.contains("disk space"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = CaptureError::BackendNotAvailable {
            backend: BackendType::None,
        };

        let debug = format!("{:?}", error);
        assert!(debug.contains("BackendNotAvailable"));
    }
}
