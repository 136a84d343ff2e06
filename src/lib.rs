//! picwalk - walk a directory tree and page through every image in it

pub mod display;
pub mod error;
pub mod input;
pub mod nav;
pub mod output;
pub mod scan;
pub mod session;
pub mod stats;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use display::{Bounds, TerminalViewer, Viewer, fit_within};
pub use error::{DecodeError, NavError, ScanError, SessionError, TraversalError, TraversalOp};
pub use input::{KeySource, ScriptedKeys, TerminalKeys};
pub use nav::{Command, Key, Navigator, Outcome};
pub use output::{OutputConfig, print_json, print_listing, print_traversal_errors};
pub use scan::{
    CancelToken, Dimensions, ImageFormat, ImageRecord, MetadataSnapshot, ScanConfig, ScanReport,
    Scanner, traverse,
};
pub use session::Session;
pub use stats::{ScanStats, StatsCollector, print_stats, print_stats_json};
