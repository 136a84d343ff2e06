//! Scanner - explicit-stack depth-first walk that collects image records

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::error::{ScanError, TraversalError, TraversalOp};

use super::cancel::CancelToken;
use super::config::ScanConfig;
use super::format::ImageFormat;
use super::record::{ImageRecord, MetadataSnapshot, ScanReport};
use super::utils::{passes_time_filter, relative_to, should_ignore_path};

/// What a popped path turned out to be. Symlinks are never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

/// A path popped from the work stack together with its `lstat` result.
/// Lives only until it has been classified.
struct ScannedEntry {
    path: PathBuf,
    depth: usize,
    metadata: Metadata,
    kind: EntryKind,
}

impl ScannedEntry {
    fn stat(path: PathBuf, depth: usize) -> io::Result<Self> {
        let metadata = fs::symlink_metadata(&path)?;
        let file_type = metadata.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        Ok(Self {
            path,
            depth,
            metadata,
            kind,
        })
    }
}

/// Directory scanner that produces an ordered sequence of [`ImageRecord`]s.
///
/// Siblings come out in directory-read order. Each subtree is exhausted before
/// the next sibling is visited. The scan never writes to the filesystem.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
    cancel: Option<CancelToken>,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Stop the scan between stack pops once `token` is cancelled.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk `root` and collect every image beneath it.
    ///
    /// # Errors
    /// Returns [`ScanError::RootUnreadable`] if `root` does not exist, is not a
    /// directory, or cannot be listed. Failures on anything below the root are
    /// recorded in [`ScanReport::errors`] instead.
    pub fn scan(&self, root: &Path) -> Result<ScanReport, ScanError> {
        let root = open_root(root)?;
        let mut report = ScanReport::new(root.clone());

        let mut stack: Vec<(PathBuf, usize)> = vec![(root.clone(), 0)];

        while let Some((path, depth)) = stack.pop() {
            if self.is_cancelled() {
                debug!(remaining = stack.len() + 1, "scan cancelled");
                report.complete = false;
                break;
            }

            let entry = match ScannedEntry::stat(path.clone(), depth) {
                Ok(entry) => entry,
                Err(e) if depth == 0 => return Err(ScanError::root_unreadable(&path, e)),
                Err(e) => {
                    record_error(&mut report, TraversalError::new(path, TraversalOp::Stat, e));
                    continue;
                }
            };

            match entry.kind {
                EntryKind::Directory => {
                    let Some(children) = self.list_children(&entry, &mut report)? else {
                        continue;
                    };
                    report.directories += 1;
                    // Reversed so the first listed child is popped first.
                    stack.extend(children.into_iter().rev().map(|c| (c, depth + 1)));
                }
                EntryKind::File => {
                    if let Some(record) = self.classify(&root, entry) {
                        report.records.push(record);
                    }
                }
                EntryKind::Symlink => {
                    debug!(path = %entry.path.display(), "skipping symbolic link");
                }
                EntryKind::Other => {
                    trace!(path = %entry.path.display(), "skipping special file");
                }
            }
        }

        info!(
            root = %report.root.display(),
            images = report.records.len(),
            directories = report.directories,
            errors = report.errors.len(),
            complete = report.complete,
            "scan finished"
        );

        Ok(report)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    /// List the children of a directory in read order.
    ///
    /// Returns `Ok(None)` when the directory is skipped, either because of the
    /// depth limit or because it could not be read. Only a failure on the root
    /// is returned as an error.
    fn list_children(
        &self,
        dir: &ScannedEntry,
        report: &mut ScanReport,
    ) -> Result<Option<Vec<PathBuf>>, ScanError> {
        if dir.depth > 0 && self.at_max_depth(dir.depth) {
            trace!(path = %dir.path.display(), "depth limit reached");
            return Ok(None);
        }

        let entries = match fs::read_dir(&dir.path) {
            Ok(entries) => entries,
            Err(e) if dir.depth == 0 => return Err(ScanError::root_unreadable(&dir.path, e)),
            Err(e) => {
                record_error(
                    report,
                    TraversalError::new(dir.path.clone(), TraversalOp::ReadDir, e),
                );
                return Ok(None);
            }
        };

        let mut children = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if should_ignore_path(&path, &self.config.ignore_patterns) {
                        trace!(path = %path.display(), "ignored by pattern");
                        continue;
                    }
                    children.push(path);
                }
                Err(e) => record_error(
                    report,
                    TraversalError::new(dir.path.clone(), TraversalOp::ReadEntry, e),
                ),
            }
        }

        Ok(Some(children))
    }

    /// Turn a regular file into a record if it is an image that passes the filters.
    fn classify(&self, root: &Path, entry: ScannedEntry) -> Option<ImageRecord> {
        let format = ImageFormat::from_path(&entry.path)?;
        let metadata = MetadataSnapshot::capture(&entry.metadata);

        if !passes_time_filter(metadata.modified, &self.config) {
            trace!(path = %entry.path.display(), "outside time window");
            return None;
        }

        let relative = relative_to(root, &entry.path);
        Some(ImageRecord::new(entry.path, relative, format, metadata))
    }
}

/// Walk `root` with default options.
///
/// Returns the ordered image records together with the non-fatal errors
/// encountered along the way.
pub fn traverse(root: &Path) -> Result<(Vec<ImageRecord>, Vec<TraversalError>), ScanError> {
    Scanner::default().scan(root).map(ScanReport::into_parts)
}

/// Resolve the root to a canonical absolute directory.
fn open_root(root: &Path) -> Result<PathBuf, ScanError> {
    let canonical = fs::canonicalize(root).map_err(|e| ScanError::root_unreadable(root, e))?;
    let metadata = fs::metadata(&canonical).map_err(|e| ScanError::root_unreadable(root, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::root_unreadable(
            root,
            io::Error::new(io::ErrorKind::NotADirectory, "Not a directory"),
        ));
    }
    Ok(canonical)
}

fn record_error(report: &mut ScanReport, error: TraversalError) {
    debug!(path = %error.path.display(), op = %error.op, "{}", error.source);
    report.errors.push(error);
}
