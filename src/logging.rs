//! Tracing subscriber setup.
//!
//! The TUI owns stdout and stderr while it runs, so log output only goes to a
//! file. Without a configured file no subscriber is installed and the
//! `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppResult;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "memodeck=info";

/// Install a global subscriber appending to `path`.
///
/// Returns `Ok(false)` if a global subscriber was already installed.
pub fn init_file_logging(path: &Path) -> AppResult<bool> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("memodeck.log");
        assert!(init_file_logging(&path).is_err());
    }

    #[test]
    fn test_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memodeck.log");
        init_file_logging(&path).unwrap();
        assert!(path.exists());
    }
}
