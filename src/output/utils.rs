//! Shared formatting helpers

use std::io::{self, Write};
use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};
use termcolor::{Color, ColorSpec, WriteColor};

/// Width of the label column in metadata and help blocks.
pub const LABEL_WIDTH: usize = 24;

/// Format a number with thousand separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format a timestamp as local date and time, or "unknown".
pub fn format_timestamp(time: Option<SystemTime>) -> String {
    match time {
        Some(t) => DateTime::<Local>::from(t)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "unknown".to_string(),
    }
}

/// Format a timestamp as RFC 3339 in UTC, for machine-readable output.
pub fn format_rfc3339(time: Option<SystemTime>) -> Option<String> {
    time.map(|t| DateTime::<Utc>::from(t).to_rfc3339())
}

/// Format a byte count in megabytes with three decimals.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.3} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Write one `label value` row of a metadata block.
pub fn write_row<W: WriteColor + ?Sized>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    write!(out, "  ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{:<width$}", label, width = LABEL_WIDTH)?;
    out.reset()?;
    writeln!(out, "{}", value)
}

/// Write a bold heading line.
pub fn write_heading<W: WriteColor + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use termcolor::NoColor;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(65536), "65,536");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0), "0.000 MB");
        assert_eq!(format_megabytes(1024 * 1024), "1.000 MB");
        assert_eq!(format_megabytes(1536 * 1024), "1.500 MB");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(None), "unknown");
        let formatted = format_timestamp(Some(SystemTime::UNIX_EPOCH + Duration::from_secs(86_400)));
        // Local offset shifts the date, but the shape is fixed
        assert_eq!(formatted.len(), "1970-01-02 00:00:00".len());
        assert!(formatted.starts_with("1970-01-0"));
    }

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(format_rfc3339(None), None);
        assert_eq!(
            format_rfc3339(Some(SystemTime::UNIX_EPOCH)).as_deref(),
            Some("1970-01-01T00:00:00+00:00")
        );
    }

    #[test]
    fn test_write_row_pads_label() {
        let mut out = NoColor::new(Vec::new());
        write_row(&mut out, "Inode", "42").unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, format!("  {:<24}42\n", "Inode"));
    }
}
