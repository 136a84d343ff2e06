//! Configuration types for the scanner

use std::time::SystemTime;

/// Configuration for scanning behavior.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Do not list directories at or below this depth (the root is depth 0).
    pub max_depth: Option<usize>,
    /// Entry names matching any of these glob patterns are skipped.
    pub ignore_patterns: Vec<String>,
    /// Only include images modified after this time
    pub newer_than: Option<SystemTime>,
    /// Only include images modified before this time
    pub older_than: Option<SystemTime>,
}
