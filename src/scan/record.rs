//! Records produced by a scan

use std::cell::OnceCell;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;

use crate::error::TraversalError;

use super::format::ImageFormat;

/// Pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Filesystem metadata captured once, when the file was discovered.
///
/// Display code reads this snapshot instead of going back to the filesystem,
/// so what the user sees matches the scan even if the file changes later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataSnapshot {
    pub size: u64,
    pub accessed: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub created: Option<SystemTime>,
    pub mode: u32,
    pub device: u64,
    pub inode: u64,
    pub links: u64,
    pub uid: u32,
    pub gid: u32,
}

impl MetadataSnapshot {
    #[cfg(unix)]
    pub fn capture(meta: &Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;

        Self {
            size: meta.len(),
            accessed: meta.accessed().ok(),
            modified: meta.modified().ok(),
            created: meta.created().ok(),
            mode: meta.mode(),
            device: meta.dev(),
            inode: meta.ino(),
            links: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
        }
    }

    #[cfg(not(unix))]
    pub fn capture(meta: &Metadata) -> Self {
        Self {
            size: meta.len(),
            accessed: meta.accessed().ok(),
            modified: meta.modified().ok(),
            created: meta.created().ok(),
            mode: if meta.permissions().readonly() { 0o444 } else { 0o644 },
            device: 0,
            inode: 0,
            links: 1,
            uid: 0,
            gid: 0,
        }
    }

    /// Permission bits only, without the file type.
    pub fn permissions(&self) -> u32 {
        self.mode & 0o7777
    }
}

/// A discovered image: where it lives and what it looked like at scan time.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    path: PathBuf,
    relative_path: PathBuf,
    format: ImageFormat,
    metadata: MetadataSnapshot,
    dimensions: OnceCell<Dimensions>,
}

impl ImageRecord {
    pub fn new(
        path: PathBuf,
        relative_path: PathBuf,
        format: ImageFormat,
        metadata: MetadataSnapshot,
    ) -> Self {
        Self {
            path,
            relative_path,
            format,
            metadata,
            dimensions: OnceCell::new(),
        }
    }

    /// Absolute path, used for I/O.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path relative to the scan root, used for display.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn metadata(&self) -> &MetadataSnapshot {
        &self.metadata
    }

    /// File name without its extension.
    pub fn file_stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Extension exactly as it appears on disk.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Pixel dimensions, if the image has been decoded.
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions.get().copied()
    }

    /// Store the decoded dimensions. The first value wins; later calls return it.
    pub fn resolve_dimensions(&self, dimensions: Dimensions) -> Dimensions {
        *self.dimensions.get_or_init(|| dimensions)
    }
}

/// Everything a scan produced.
#[derive(Debug)]
pub struct ScanReport {
    /// Canonical absolute root the scan started from.
    pub root: PathBuf,
    /// Images in traversal order.
    pub records: Vec<ImageRecord>,
    /// Per-entry failures, in the order they were hit.
    pub errors: Vec<TraversalError>,
    /// Directories successfully visited, including the root.
    pub directories: usize,
    /// False when the scan was cancelled before the stack drained.
    pub complete: bool,
}

impl ScanReport {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            records: Vec::new(),
            errors: Vec::new(),
            directories: 0,
            complete: true,
        }
    }

    /// Split into the ordered records and the collected errors.
    pub fn into_parts(self) -> (Vec<ImageRecord>, Vec<TraversalError>) {
        (self.records, self.errors)
    }
}
