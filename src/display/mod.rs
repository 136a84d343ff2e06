//! Image display
//!
//! The session talks to the display through the [`Viewer`] trait so the
//! interactive loop can be driven without a terminal in tests.

mod fit;
mod terminal;

use std::io;

use image::RgbImage;
use termcolor::WriteColor;

use crate::error::DecodeError;
use crate::scan::{Dimensions, ImageRecord};

pub use fit::{Bounds, fit_within};
pub use terminal::TerminalViewer;

/// A decoded image, already scaled to its display size.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Size of the image as stored on disk.
    pub original: Dimensions,
    /// Size after fitting into the display bounds.
    pub fitted: Dimensions,
    pub pixels: RgbImage,
}

/// Decodes and paints images for the session.
pub trait Viewer {
    /// Decode `record` and scale it for display.
    ///
    /// Implementations store the decoded pixel size in the record.
    fn open(&mut self, record: &ImageRecord) -> Result<Frame, DecodeError>;

    /// Paint a previously opened frame.
    fn paint<W: WriteColor + ?Sized>(&mut self, frame: &Frame, out: &mut W) -> io::Result<()>;
}
