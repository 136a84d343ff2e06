//! Navigation over a finished scan
//!
//! - `Navigator`: cursor over the immutable record sequence
//! - `Command` / `Key`: mapping from key presses to moves

mod keymap;
mod navigator;

pub use keymap::{BINDINGS, Command, Key};
pub use navigator::{Navigator, Outcome};
