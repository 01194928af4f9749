//! Data models and type definitions for screenshot-backup
//!
//! This module defines the core types used throughout the application:
//! - Platform and backend detection types

/// Represents the display backend type for the current platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// No backend detected or not yet initialized
    None,
    /// Wayland display server (Linux)
    Wayland,
    /// X11 display server (Linux)
    X11,
    /// Windows Graphics Capture API
    Windows,
    /// macOS ScreenCaptureKit
    MacOS,
}

impl BackendType {
    /// Returns the backend type as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendType::None => "none",
            BackendType::Wayland => "wayland",
            BackendType::X11 => "x11",
            BackendType::Windows => "windows",
            BackendType::MacOS => "macos",
        }
    }
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Platform information including OS and display backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Operating system name (e.g., "linux", "windows", "macos")
    pub os:      String,
    /// Detected display backend
    pub backend: BackendType,
}

impl PlatformInfo {
    /// Creates a new PlatformInfo instance
    pub fn new(os: String, backend: BackendType) -> Self {
        Self { os, backend }
    }
}
