//! Viewer that decodes with the `image` crate and paints half-block previews

use std::io::{self, Write};

use image::imageops::{self, FilterType};
use image::{ImageReader, RgbImage};
use termcolor::{Color, ColorSpec, WriteColor};
use tracing::debug;

use crate::error::DecodeError;
use crate::scan::{Dimensions, ImageRecord};

use super::fit::{Bounds, fit_within};
use super::{Frame, Viewer};

/// Fallback when the terminal size cannot be queried.
const FALLBACK_TERMINAL: (u16, u16) = (80, 24);

/// Lines kept free below the preview for the metadata block and help.
const RESERVED_LINES: u16 = 28;

/// Smallest preview height, in terminal lines.
const MIN_PREVIEW_LINES: u16 = 8;

const UPPER_HALF_BLOCK: &str = "\u{2580}";

/// Decodes images from disk and paints them into a colour terminal.
#[derive(Debug, Clone)]
pub struct TerminalViewer {
    bounds: Bounds,
    preview: bool,
    preview_size: Option<(u32, u32)>,
}

impl TerminalViewer {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            preview: true,
            preview_size: None,
        }
    }

    /// Enable or disable painting. Decoding still happens either way.
    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Use a fixed preview area of `cols` x `lines` cells instead of the terminal size.
    pub fn with_preview_size(mut self, cols: u32, lines: u32) -> Self {
        self.preview_size = Some((cols, lines));
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn preview_area(&self) -> (u32, u32) {
        if let Some(size) = self.preview_size {
            return size;
        }
        let (cols, rows) = crossterm::terminal::size().unwrap_or(FALLBACK_TERMINAL);
        let lines = rows.saturating_sub(RESERVED_LINES).max(MIN_PREVIEW_LINES);
        (u32::from(cols), u32::from(lines))
    }
}

impl Viewer for TerminalViewer {
    fn open(&mut self, record: &ImageRecord) -> Result<Frame, DecodeError> {
        let path = record.path();
        let open_err = |source| DecodeError::Open {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .map_err(open_err)?
            .with_guessed_format()
            .map_err(open_err)?
            .decode()
            .map_err(|source| DecodeError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        let original = record.resolve_dimensions(Dimensions::new(image.width(), image.height()));
        let fitted = fit_within(original, self.bounds);
        debug!(
            path = %path.display(),
            width = original.width,
            height = original.height,
            fitted_width = fitted.width,
            fitted_height = fitted.height,
            "decoded image"
        );

        let pixels = if fitted == original {
            image.to_rgb8()
        } else {
            image
                .resize_exact(fitted.width, fitted.height, FilterType::Triangle)
                .to_rgb8()
        };

        Ok(Frame {
            original,
            fitted,
            pixels,
        })
    }

    fn paint<W: WriteColor + ?Sized>(&mut self, frame: &Frame, out: &mut W) -> io::Result<()> {
        if !self.preview || !out.supports_color() {
            return Ok(());
        }
        let (cols, lines) = self.preview_area();
        paint_half_blocks(out, &frame.pixels, cols, lines)
    }
}

/// Paint `pixels` into at most `cols` x `lines` cells.
///
/// Each cell shows two vertically stacked pixels: the upper one as the
/// foreground of an upper-half block, the lower one as the background.
pub fn paint_half_blocks<W: WriteColor + ?Sized>(
    out: &mut W,
    pixels: &RgbImage,
    cols: u32,
    lines: u32,
) -> io::Result<()> {
    let (width, height) = pixels.dimensions();
    if width == 0 || height == 0 || cols == 0 || lines == 0 {
        return Ok(());
    }

    let target = fit_within(Dimensions::new(width, height), Bounds::new(lines * 2, cols));
    let small = imageops::resize(pixels, target.width, target.height, FilterType::Triangle);

    for y in (0..target.height).step_by(2) {
        for x in 0..target.width {
            let top = small.get_pixel(x, y).0;
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(Color::Rgb(top[0], top[1], top[2])));
            if y + 1 < target.height {
                let bottom = small.get_pixel(x, y + 1).0;
                spec.set_bg(Some(Color::Rgb(bottom[0], bottom[1], bottom[2])));
            }
            out.set_color(&spec)?;
            write!(out, "{}", UPPER_HALF_BLOCK)?;
        }
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Scanner;
    use crate::test_utils::TestTree;
    use termcolor::{Buffer, NoColor};

    fn scan_one(tree: &TestTree) -> ImageRecord {
        let report = Scanner::default().scan(tree.path()).unwrap();
        report.records.into_iter().next().unwrap()
    }

    #[test]
    fn test_open_resolves_dimensions() {
        let tree = TestTree::new();
        tree.add_image("wide.png", 40, 10);
        let record = scan_one(&tree);

        let mut viewer = TerminalViewer::new(Bounds::new(5, 8));
        let frame = viewer.open(&record).unwrap();

        assert_eq!(frame.original, Dimensions::new(40, 10));
        assert_eq!(record.dimensions(), Some(Dimensions::new(40, 10)));
        assert_eq!(frame.fitted, Dimensions::new(8, 2));
        assert_eq!(frame.pixels.dimensions(), (8, 2));
    }

    #[test]
    fn test_small_image_is_not_resized() {
        let tree = TestTree::new();
        tree.add_image("small.jpg", 12, 9);
        let record = scan_one(&tree);

        let frame = TerminalViewer::new(Bounds::default()).open(&record).unwrap();
        assert_eq!(frame.fitted, frame.original);
        assert_eq!(frame.pixels.dimensions(), (12, 9));
    }

    #[test]
    fn test_garbage_is_a_decode_failure() {
        let tree = TestTree::new();
        tree.add_file("fake.png", b"definitely not a png");
        let record = scan_one(&tree);

        let err = TerminalViewer::new(Bounds::default()).open(&record).unwrap_err();
        assert!(matches!(err, DecodeError::Decode { .. }));
        assert_eq!(err.path(), record.path());
        assert_eq!(record.dimensions(), None);
    }

    #[test]
    fn test_vanished_file_is_an_open_failure() {
        let tree = TestTree::new();
        let file = tree.add_image("gone.png", 2, 2);
        let record = scan_one(&tree);
        std::fs::remove_file(file).unwrap();

        let err = TerminalViewer::new(Bounds::default()).open(&record).unwrap_err();
        assert!(matches!(err, DecodeError::Open { .. }));
    }

    #[test]
    fn test_paint_writes_half_blocks_on_colour_output() {
        let tree = TestTree::new();
        tree.add_image("a.png", 4, 4);
        let record = scan_one(&tree);

        let mut viewer = TerminalViewer::new(Bounds::default()).with_preview_size(4, 2);
        let frame = viewer.open(&record).unwrap();

        let mut out = Buffer::ansi();
        viewer.paint(&frame, &mut out).unwrap();
        let text = String::from_utf8_lossy(out.as_slice()).to_string();

        assert_eq!(text.matches(UPPER_HALF_BLOCK).count(), 8);
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_paint_skips_plain_output() {
        let tree = TestTree::new();
        tree.add_image("a.png", 4, 4);
        let record = scan_one(&tree);

        let mut viewer = TerminalViewer::new(Bounds::default()).with_preview_size(4, 2);
        let frame = viewer.open(&record).unwrap();

        let mut out = NoColor::new(Vec::new());
        viewer.paint(&frame, &mut out).unwrap();
        assert!(out.into_inner().is_empty());
    }

    #[test]
    fn test_paint_disabled() {
        let tree = TestTree::new();
        tree.add_image("a.png", 4, 4);
        let record = scan_one(&tree);

        let mut viewer = TerminalViewer::new(Bounds::default())
            .with_preview(false)
            .with_preview_size(4, 2);
        let frame = viewer.open(&record).unwrap();

        let mut out = Buffer::ansi();
        viewer.paint(&frame, &mut out).unwrap();
        assert!(out.as_slice().is_empty());
    }
}
