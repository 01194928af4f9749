//! Capture-and-save backup routine
//!
//! Implements the fixed sequence behind the binary: ensure the backup
//! directory exists, build a timestamped target path, capture the primary
//! display, encode it as PNG, and write the file.
//!
//! Filenames embed local time at second granularity
//! (`screenshot-YYYY-MM-DD-HHMMSS.png`). Two runs within the same second
//! produce the same path and the later write overwrites the earlier one;
//! this is accepted behavior.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::capture::ScreenCapture;
use crate::error::CaptureResult;
use crate::util::encode::encode_png;

/// Relative directory where screenshot backups are stored
pub const BACKUP_DIR: &str = "backups/screenshots";

/// Timestamp format embedded in backup filenames (second granularity)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H%M%S";

/// Ensures the backup directory exists, creating missing parents
///
/// An already-existing directory is success. Errors from this step are the
/// caller's problem: the binary deliberately does not catch them, so a
/// failure here terminates the process abnormally.
pub fn ensure_backup_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

/// Formats the current local time for use in a backup filename
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Builds the target file path for a backup with the given timestamp
pub fn target_path(dir: &Path, timestamp: &str) -> PathBuf {
    dir.join(format!("screenshot-{timestamp}.png"))
}

/// Captures the primary display and saves it as a timestamped PNG in `dir`
///
/// Returns the path of the written file. All failures (capture, encode,
/// write) surface as [`CaptureError`](crate::error::CaptureError) for the
/// caller's single report boundary.
pub fn capture_and_save(backend: &dyn ScreenCapture, dir: &Path) -> CaptureResult<PathBuf> {
    let path = target_path(dir, &timestamp());
    tracing::debug!(
        "Capturing primary display via {} backend to {}",
        backend.backend_type(),
        path.display()
    );

    let image = backend.capture_display(None)?;
    tracing::debug!("Captured {}x{} frame", image.width(), image.height());

    let data = encode_png(&image)?;
    fs::write(&path, data)?;

    tracing::info!("Screenshot saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    #[test]
    fn test_timestamp_matches_format() {
        let ts = timestamp();

        // YYYY-MM-DD-HHMMSS is 17 characters and parses back losslessly
        assert_eq!(ts.len(), 17);
        let parsed = NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT);
        assert!(parsed.is_ok(), "timestamp '{}' should parse with its own format", ts);
    }

    #[test]
    fn test_target_path_joins_dir_and_filename() {
        let path = target_path(Path::new("backups/screenshots"), "2026-08-05-093015");

        assert_eq!(
            path,
            Path::new("backups/screenshots/screenshot-2026-08-05-093015.png")
        );
    }

    #[test]
    fn test_target_path_is_deterministic_per_second() {
        let dir = Path::new("backups/screenshots");
        let a = target_path(dir, "2026-08-05-093015");
        let b = target_path(dir, "2026-08-05-093015");

        // Same second means same path: the collision the tool accepts
        assert_eq!(a, b);
    }

    #[test]
    fn test_backup_dir_constant() {
        assert_eq!(BACKUP_DIR, "backups/screenshots");
    }
}
