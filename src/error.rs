//! Error types for picwalk.
//!
//! Only whole-scan failures surface as [`ScanError`]. Problems with individual
//! entries are collected as [`TraversalError`]s inside the scan report, and
//! decode failures are reported per image without ending the session.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure that aborts a scan before any image is collected.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The root is missing, not a directory, or cannot be listed.
    #[error("cannot access '{}': {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub(crate) fn root_unreadable(path: &Path, source: io::Error) -> Self {
        ScanError::RootUnreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The filesystem operation that failed for a [`TraversalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOp {
    /// `lstat` on the popped path.
    Stat,
    /// Opening a directory for listing.
    ReadDir,
    /// Advancing the directory iterator.
    ReadEntry,
}

impl fmt::Display for TraversalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TraversalOp::Stat => "stat",
            TraversalOp::ReadDir => "read directory",
            TraversalOp::ReadEntry => "read directory entry",
        };
        f.write_str(s)
    }
}

/// A non-fatal failure on a single entry encountered mid-walk.
#[derive(Debug, thiserror::Error)]
#[error("{op} failed for '{}': {source}", path.display())]
pub struct TraversalError {
    pub path: PathBuf,
    pub op: TraversalOp,
    #[source]
    pub source: io::Error,
}

impl TraversalError {
    pub fn new(path: impl Into<PathBuf>, op: TraversalOp, source: io::Error) -> Self {
        Self {
            path: path.into(),
            op,
            source,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

/// Errors raised by the navigation layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// There is nothing to navigate.
    #[error("no images to display")]
    EmptySequence,
}

/// An image could not be opened or decoded for display.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("cannot open input image '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode input image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl DecodeError {
    /// Path of the image that failed.
    pub fn path(&self) -> &Path {
        match self {
            DecodeError::Open { path, .. } | DecodeError::Decode { path, .. } => path,
        }
    }
}

/// Failure that ends an interactive session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Navigation(#[from] NavError),

    /// Reading a key or writing to the terminal failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
