//! Image format classification by file extension

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Image formats the scanner collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
    Webp,
}

impl ImageFormat {
    /// Detect the format from an extension, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use picwalk::scan::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::from_extension("Png"), Some(ImageFormat::Png));
    /// assert_eq!(ImageFormat::from_extension("txt"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "bmp" => Some(ImageFormat::Bmp),
            "tiff" => Some(ImageFormat::Tiff),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    /// Detect the format from the extension of `path`.
    ///
    /// Paths without an extension, or with a non UTF-8 one, are not images.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Bmp => "BMP",
            ImageFormat::Tiff => "TIFF",
            ImageFormat::Webp => "WebP",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
