//! screenshot-backup: one-shot display screenshot backup
//!
//! Captures the current display and writes it to a timestamped PNG under
//! `backups/screenshots`, printing exactly one result line to stdout.

use std::path::Path;

use anyhow::{Context, Result};
use screenshot_backup::backup::{self, BACKUP_DIR};
use screenshot_backup::capture::create_default_backend;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    // Initialize logging
    // Diagnostics go to stderr and stay off unless RUST_LOG is set, so
    // stdout carries only the single report line
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let dir = Path::new(BACKUP_DIR);

    // Directory-creation failures are not caught below: they propagate out
    // of main and terminate with a nonzero status
    backup::ensure_backup_dir(dir)
        .with_context(|| format!("failed to create backup directory {}", dir.display()))?;

    // Single boundary: everything from backend selection through the file
    // write is caught and reported on stdout, and the process exits normally
    let result =
        create_default_backend().and_then(|backend| backup::capture_and_save(backend.as_ref(), dir));

    match result {
        Ok(path) => println!("✅ Screenshot saved: {}", path.display()),
        Err(err) => println!("❌ Failed to take screenshot: {err}"),
    }

    Ok(())
}
