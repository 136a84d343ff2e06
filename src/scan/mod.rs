//! Directory scanning
//!
//! Walks a directory tree depth-first with an explicit stack, classifies each
//! entry by extension and snapshots the metadata of every image it keeps.
//!
//! - `Scanner`: configurable walk producing a `ScanReport`
//! - `traverse`: one-shot walk with default options

mod cancel;
mod config;
mod format;
mod record;
mod utils;
mod walker;

pub use cancel::CancelToken;
pub use config::ScanConfig;
pub use format::ImageFormat;
pub use record::{Dimensions, ImageRecord, MetadataSnapshot, ScanReport};
pub use utils::format_size;
pub use walker::{Scanner, traverse};
