//! Terminal and JSON output
//!
//! - `record` - metadata block, key help and hints shown during a session
//! - `listing` - plain path listing and traversal warnings
//! - `json` - machine-readable scan output
//! - `utils` - number, size and time formatting

mod config;
mod json;
mod listing;
mod record;
mod utils;

pub use config::OutputConfig;
pub use json::{JsonError, JsonImage, JsonScan, print_json, to_json};
pub use listing::{print_listing, print_traversal_errors};
pub use record::{print_commands, print_decode_failure, print_hint, print_record};
pub use utils::{format_megabytes, format_number, format_timestamp};
