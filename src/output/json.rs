//! JSON output formatting

use std::io;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::TraversalError;
use crate::scan::{Dimensions, ImageFormat, ImageRecord, ScanReport};

use super::utils::format_rfc3339;

/// Serializable view of a scan.
#[derive(Debug, Serialize)]
pub struct JsonScan {
    pub root: PathBuf,
    pub complete: bool,
    pub directories: usize,
    pub images: Vec<JsonImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// Serializable view of one image record.
#[derive(Debug, Serialize)]
pub struct JsonImage {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub format: ImageFormat,
    pub size_bytes: u64,
    pub mode: u32,
    pub device: u64,
    pub inode: u64,
    pub links: u64,
    pub uid: u32,
    pub gid: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Only present for records that have already been decoded. A plain
    /// `--json` scan decodes nothing, so the CLI never emits it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

#[derive(Debug, Serialize)]
pub struct JsonError {
    pub path: PathBuf,
    pub operation: String,
    pub message: String,
}

impl From<&ImageRecord> for JsonImage {
    fn from(record: &ImageRecord) -> Self {
        let meta = record.metadata();
        Self {
            path: record.path().to_path_buf(),
            relative_path: record.relative_path().to_path_buf(),
            format: record.format(),
            size_bytes: meta.size,
            mode: meta.mode,
            device: meta.device,
            inode: meta.inode,
            links: meta.links,
            uid: meta.uid,
            gid: meta.gid,
            accessed: format_rfc3339(meta.accessed),
            modified: format_rfc3339(meta.modified),
            created: format_rfc3339(meta.created),
            dimensions: record.dimensions(),
        }
    }
}

impl From<&TraversalError> for JsonError {
    fn from(error: &TraversalError) -> Self {
        Self {
            path: error.path.clone(),
            operation: error.op.to_string(),
            message: error.source.to_string(),
        }
    }
}

impl From<&ScanReport> for JsonScan {
    fn from(report: &ScanReport) -> Self {
        Self {
            root: report.root.clone(),
            complete: report.complete,
            directories: report.directories,
            images: report.records.iter().map(JsonImage::from).collect(),
            errors: report.errors.iter().map(JsonError::from).collect(),
        }
    }
}

/// Render a scan as pretty-printed JSON.
pub fn to_json(report: &ScanReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonScan::from(report))
}

/// Print a scan as pretty-printed JSON to stdout.
pub fn print_json(report: &ScanReport) -> io::Result<()> {
    let json = to_json(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
