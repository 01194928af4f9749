//! Windows capture backend using Windows Graphics Capture API
//!
//! This module implements display capture for Windows using the
//! windows-capture crate (WGC). A one-shot frame handler grabs the first
//! delivered frame, converts it from BGRA to RGBA, and stops the session.
//!
//! # Windows Version Requirements
//!
//! Windows Graphics Capture requires Windows 10 version 1803 (April 2018
//! Update) or later.

use std::sync::{Arc, Mutex, mpsc};

use image::{DynamicImage, RgbaImage};
use windows_capture::{
    capture::GraphicsCaptureApiHandler,
    frame::Frame,
    graphics_capture_api::InternalCaptureControl,
    monitor::Monitor as WcMonitor,
    settings::{ColorFormat, CursorCaptureSettings, DrawBorderSettings, Settings},
};

use super::{ImageBuffer, ScreenCapture};
use crate::{
    error::{CaptureError, CaptureResult},
    model::BackendType,
};

/// Timeout for the first captured frame (2s)
///
/// WGC delivers the first frame quickly in practice, but we allow extra
/// time for large displays and GPU scheduling delays.
const CAPTURE_FRAME_TIMEOUT_MS: u64 = 2000;

/// Channel slot shared with the frame handler
type FrameSender = Arc<Mutex<Option<mpsc::SyncSender<CaptureResult<DynamicImage>>>>>;

/// Windows display capture backend using WGC
///
/// Stateless: each capture starts a fresh free-threaded WGC session and
/// tears it down after the first frame.
#[derive(Debug)]
pub struct WindowsBackend {
    _private: (),
}

/// One-shot frame handler: sends the first frame and stops the session
struct OneShotMonitorCapture {
    tx: FrameSender,
}

impl GraphicsCaptureApiHandler for OneShotMonitorCapture {
    type Flags = FrameSender;
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn new(ctx: windows_capture::capture::Context<Self::Flags>) -> Result<Self, Self::Error> {
        Ok(Self { tx: ctx.flags })
    }

    fn on_frame_arrived(
        &mut self,
        frame: &mut Frame,
        capture_control: InternalCaptureControl,
    ) -> Result<(), Self::Error> {
        // Get dimensions first (before mutable borrow of buffer)
        let width = frame.width();
        let height = frame.height();

        let mut buffer = frame.buffer()?;
        let raw_data = buffer.as_raw_buffer();

        // Convert BGRA to RGBA
        let mut rgba_data = Vec::with_capacity(raw_data.len());
        for chunk in raw_data.chunks(4) {
            if chunk.len() == 4 {
                rgba_data.push(chunk[2]); // R
                rgba_data.push(chunk[1]); // G
                rgba_data.push(chunk[0]); // B
                rgba_data.push(chunk[3]); // A
            }
        }

        let image = match RgbaImage::from_raw(width, height, rgba_data) {
            Some(img) => DynamicImage::ImageRgba8(img),
            None => {
                if let Some(tx) = self.tx.lock().unwrap().take() {
                    let _ = tx.send(Err(CaptureError::ImageError(
                        "Failed to create image from frame".into(),
                    )));
                }
                capture_control.stop();
                return Ok(());
            }
        };

        if let Some(tx) = self.tx.lock().unwrap().take() {
            let _ = tx.send(Ok(image));
        }

        // Stop after first frame
        capture_control.stop();
        Ok(())
    }

    fn on_closed(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl WindowsBackend {
    /// Creates a new WindowsBackend instance
    pub fn new() -> CaptureResult<Self> {
        Ok(Self { _private: () })
    }

    /// Synchronously captures a monitor/display using WGC
    ///
    /// Blocks on a bounded channel until the one-shot handler delivers the
    /// first frame or the timeout elapses.
    fn capture_display_sync(display_id: Option<u32>) -> CaptureResult<DynamicImage> {
        // Get monitor - primary if None, or by index
        let monitor = match display_id {
            None => WcMonitor::primary().map_err(|e| {
                tracing::error!("Failed to get primary monitor: {}", e);
                CaptureError::BackendNotAvailable {
                    backend: BackendType::Windows,
                }
            })?,
            Some(id) => WcMonitor::from_index(id as usize).map_err(|e| {
                tracing::error!("Monitor {} not found: {}", id, e);
                CaptureError::InvalidParameter {
                    parameter: "display_id".to_string(),
                    reason:    format!("Monitor {} not found", id),
                }
            })?,
        };

        // Create channel for receiving the captured frame
        let (tx, rx) = mpsc::sync_channel::<CaptureResult<DynamicImage>>(1);
        let tx: FrameSender = Arc::new(Mutex::new(Some(tx)));

        let settings = Settings::new(
            monitor,
            CursorCaptureSettings::WithoutCursor,
            DrawBorderSettings::WithoutBorder,
            ColorFormat::Bgra8,
            tx.clone(),
        );

        let capture = OneShotMonitorCapture::start_free_threaded(settings).map_err(|e| {
            tracing::error!("Failed to start WGC monitor capture: {}", e);
            CaptureError::CaptureFailed {
                backend: BackendType::Windows,
                reason:  e.to_string(),
            }
        })?;

        // Wait for frame with timeout
        let result = rx
            .recv_timeout(std::time::Duration::from_millis(CAPTURE_FRAME_TIMEOUT_MS))
            .map_err(|_| {
                tracing::warn!("Capture timeout waiting for monitor frame");
                CaptureError::CaptureTimeout {
                    duration_ms: CAPTURE_FRAME_TIMEOUT_MS,
                }
            })?;

        // Stop capture if still running
        drop(capture);

        result
    }
}

impl ScreenCapture for WindowsBackend {
    /// Captures a screenshot of an entire display
    ///
    /// Captures the primary monitor when `display_id` is `None`, or the
    /// monitor at the given index.
    fn capture_display(&self, display_id: Option<u32>) -> CaptureResult<ImageBuffer> {
        tracing::debug!("Windows capture_display (display_id={:?})", display_id);

        let image = Self::capture_display_sync(display_id)?;

        tracing::info!("Captured display: {}x{}", image.width(), image.height());

        Ok(ImageBuffer::new(image))
    }

    fn backend_type(&self) -> BackendType {
        BackendType::Windows
    }
}
