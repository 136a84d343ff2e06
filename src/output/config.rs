//! Output configuration types

use termcolor::{ColorChoice, StandardStream};

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Paint a colour preview of each image in the terminal.
    pub preview: bool,
}

impl OutputConfig {
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }

    pub fn stdout(&self) -> StandardStream {
        StandardStream::stdout(self.color_choice())
    }

    pub fn stderr(&self) -> StandardStream {
        StandardStream::stderr(self.color_choice())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            preview: true,
        }
    }
}
