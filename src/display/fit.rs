//! Aspect-preserving size fitting

use crate::scan::Dimensions;

/// Largest display area an image may occupy, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub rows: u32,
    pub cols: u32,
}

impl Bounds {
    pub const DEFAULT_ROWS: u32 = 720;
    pub const DEFAULT_COLS: u32 = 1080;

    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
    }
}

/// Scale `dims` down to fit inside `bounds`, keeping the aspect ratio.
///
/// Images that already fit are returned unchanged; images are never enlarged.
/// Neither side of the result is ever zero.
pub fn fit_within(dims: Dimensions, bounds: Bounds) -> Dimensions {
    if dims.width == 0 || dims.height == 0 {
        return dims;
    }
    if dims.width <= bounds.cols && dims.height <= bounds.rows {
        return dims;
    }

    let scale = f64::min(
        f64::from(bounds.cols) / f64::from(dims.width),
        f64::from(bounds.rows) / f64::from(dims.height),
    );

    let width = (f64::from(dims.width) * scale).round() as u32;
    let height = (f64::from(dims.height) * scale).round() as u32;

    Dimensions::new(
        width.clamp(1, bounds.cols.max(1)),
        height.clamp(1, bounds.rows.max(1)),
    )
}
