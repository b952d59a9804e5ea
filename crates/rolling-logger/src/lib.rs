//! Rolling Logger
//!
//! File logging for desktop apps: `tracing` events go to stderr and to
//! `<app>.log` in the log directory. When the file grows past the policy
//! limit it is rotated to `<app>.1.log`, `<app>.2.log`, ... and the oldest
//! backup is dropped. The most recent lines are also kept in memory.
//!
//! `log` records are forwarded to the same subscriber.

mod ring;
mod writer;

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use ring::RecentLines;
pub use writer::{RollingWriter, RotationPolicy};

static RECENT: OnceLock<RecentLines> = OnceLock::new();

/// Number of lines kept in memory by default
pub const DEFAULT_RECENT_LINES: usize = 500;

/// Initialize logging. Fails if a global subscriber is already installed.
pub fn init_logger_with(
    log_dir: PathBuf,
    app_name: &str,
    policy: RotationPolicy,
) -> Result<(), String> {
    let recent = RECENT
        .get_or_init(|| RecentLines::new(DEFAULT_RECENT_LINES))
        .clone();
    let writer = RollingWriter::open(log_dir, app_name, policy, Some(recent))
        .map_err(|e| format!("Failed to open log file: {}", e))?;

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    tracing::info!(app = app_name, "logger initialized");
    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    if RECENT.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

pub fn info(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}

/// Most recent log lines, oldest first. Empty before initialization.
pub fn recent_lines() -> Vec<String> {
    RECENT.get().map(RecentLines::snapshot).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Installs the global subscriber, so it is the only test that may do so.
    #[test]
    fn test_init_keeps_recent_lines_in_memory() {
        assert!(info("before init").is_err());
        assert!(recent_lines().is_empty());

        let dir = tempfile::tempdir().unwrap();
        init_logger_with(dir.path().to_path_buf(), "App", RotationPolicy::default()).unwrap();
        info("first entry").unwrap();
        error("second entry").unwrap();

        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.contains("logger initialized")));
        assert!(lines.iter().any(|l| l.contains("INFO") && l.contains("first entry")));
        assert!(lines.last().unwrap().contains("second entry"));

        let file = std::fs::read_to_string(dir.path().join("App.log")).unwrap();
        assert!(file.contains("first entry"));

        let again = init_logger_with(dir.path().to_path_buf(), "App", RotationPolicy::default());
        assert!(again.is_err());
    }
}
