//! Shared helpers for the scanner

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use glob::Pattern;

use super::config::ScanConfig;

/// Check if a path should be skipped based on its name and the ignore patterns.
pub fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    if ignore_patterns.is_empty() {
        return false;
    }

    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    ignore_patterns
        .iter()
        .any(|pattern| name == *pattern || glob_match(pattern, &name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Check a modification time against the configured time window.
///
/// Files whose mtime could not be read are kept.
pub fn passes_time_filter(modified: Option<SystemTime>, config: &ScanConfig) -> bool {
    if config.newer_than.is_none() && config.older_than.is_none() {
        return true;
    }

    let Some(mtime) = modified else {
        return true;
    };

    if let Some(newer) = config.newer_than {
        if mtime < newer {
            return false;
        }
    }

    if let Some(older) = config.older_than {
        if mtime > older {
            return false;
        }
    }

    true
}

/// Path of `path` relative to `root`, using the platform separator.
///
/// Falls back to the full path when `path` is not under `root`.
pub fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
