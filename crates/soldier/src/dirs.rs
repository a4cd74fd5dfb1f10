//! Platform-specific directory utilities
//!
//! Resolves where the soldier binary writes its log file, following platform
//! conventions for cache directories.

use std::path::{Path, PathBuf};

use crate::error::{Result, SoldierError};

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/soldier/logs`
/// - Linux: `~/.cache/soldier/logs` (or `$XDG_CACHE_HOME/soldier/logs`)
/// - Windows: `%LOCALAPPDATA%\soldier\logs`
/// - Fallback: `/tmp/soldier/logs`
pub fn default_log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "soldier")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/soldier"));

    base_dir.join("logs")
}

/// Uses `configured` if given, otherwise [`default_log_dir`].
pub fn log_dir(configured: Option<&Path>) -> PathBuf {
    configured
        .map(Path::to_path_buf)
        .unwrap_or_else(default_log_dir)
}

/// Creates `dir` (and parents) if missing.
pub fn prepare_log_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|source| SoldierError::LogDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_dir_wins() {
        let dir = Path::new("/var/log/soldier");
        assert_eq!(log_dir(Some(dir)), dir);
    }

    #[test]
    fn default_dir_ends_in_logs() {
        assert!(log_dir(None).ends_with("logs"));
    }

    #[test]
    fn prepare_creates_nested_directories() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");

        let prepared = prepare_log_dir(&nested).unwrap();
        assert!(prepared.is_dir());
    }

    #[test]
    fn prepare_reports_path_on_failure() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("occupied");
        std::fs::write(&file, b"not a directory").unwrap();

        let err = prepare_log_dir(&file.join("logs")).unwrap_err();
        assert!(matches!(err, SoldierError::LogDirectory { .. }));
        assert!(err.to_string().contains("occupied"));
    }
}
