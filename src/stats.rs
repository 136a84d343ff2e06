//! Scan statistics collection and display
//!
//! Aggregates a finished scan into image counts and byte totals per format.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::output::format_number;
use crate::scan::{ImageFormat, ImageRecord, ScanReport, format_size};

/// Collected statistics about a scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    /// Total number of images
    pub images: usize,
    /// Directories that were listed
    pub directories: usize,
    /// Entries that could not be read
    pub errors: usize,
    /// Sum of image sizes in bytes
    pub total_bytes: u64,
    /// False if the scan was cancelled
    pub complete: bool,
    /// Statistics by format
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub by_format: Vec<FormatStats>,
}

/// Statistics for a single image format.
#[derive(Debug, Clone, Serialize)]
pub struct FormatStats {
    pub format: ImageFormat,
    pub images: usize,
    pub bytes: u64,
}

/// Statistics collector that accumulates data record by record.
#[derive(Debug, Default)]
pub struct StatsCollector {
    images: usize,
    directories: usize,
    errors: usize,
    total_bytes: u64,
    complete: bool,
    /// Maps format -> (image_count, byte_count)
    by_format: BTreeMap<ImageFormat, (usize, u64)>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self {
            complete: true,
            ..Default::default()
        }
    }

    /// Record one image.
    pub fn record_image(&mut self, record: &ImageRecord) {
        let size = record.metadata().size;
        self.images += 1;
        self.total_bytes += size;

        let entry = self.by_format.entry(record.format()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += size;
    }

    /// Record directories and errors from a report, along with its images.
    pub fn record_report(&mut self, report: &ScanReport) {
        self.directories += report.directories;
        self.errors += report.errors.len();
        self.complete &= report.complete;
        for record in &report.records {
            self.record_image(record);
        }
    }

    /// Finalize and return the collected statistics.
    pub fn finalize(self) -> ScanStats {
        let mut by_format: Vec<FormatStats> = self
            .by_format
            .into_iter()
            .map(|(format, (images, bytes))| FormatStats {
                format,
                images,
                bytes,
            })
            .collect();

        // Most common first; ties keep format order
        by_format.sort_by(|a, b| b.images.cmp(&a.images));

        ScanStats {
            images: self.images,
            directories: self.directories,
            errors: self.errors,
            total_bytes: self.total_bytes,
            complete: self.complete,
            by_format,
        }
    }
}

impl From<&ScanReport> for ScanStats {
    fn from(report: &ScanReport) -> Self {
        let mut collector = StatsCollector::new();
        collector.record_report(report);
        collector.finalize()
    }
}

/// Print statistics to stdout with optional color.
pub fn print_stats(stats: &ScanStats, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_stats(&mut stdout, stats)
}

/// Write statistics to any colour-capable writer.
pub fn write_stats<W: WriteColor + ?Sized>(out: &mut W, stats: &ScanStats) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    out.set_color(&bold)?;
    writeln!(out, "Scan Statistics")?;
    out.reset()?;
    writeln!(out, "───────────────")?;

    writeln!(out, "Images:       {} total", format_number(stats.images as u64))?;
    writeln!(out, "Directories:  {}", stats.directories)?;
    writeln!(
        out,
        "Size:         {} ({} bytes)",
        format_size(stats.total_bytes),
        format_number(stats.total_bytes)
    )?;
    if stats.errors > 0 {
        writeln!(out, "Unreadable:   {}", stats.errors)?;
    }
    if !stats.complete {
        writeln!(out, "Scan interrupted; counts are partial")?;
    }
    writeln!(out)?;

    if !stats.by_format.is_empty() {
        out.set_color(&bold)?;
        writeln!(out, "By Format:")?;
        out.reset()?;

        let mut format_color = ColorSpec::new();
        format_color.set_fg(Some(Color::Cyan));

        for entry in &stats.by_format {
            write!(out, "  ")?;
            out.set_color(&format_color)?;
            write!(out, "{:<8}", entry.format.name())?;
            out.reset()?;
            writeln!(
                out,
                "{:>6} images  {:>8}",
                entry.images,
                format_size(entry.bytes)
            )?;
        }
    }

    Ok(())
}

/// Print statistics as JSON.
pub fn print_stats_json(stats: &ScanStats) -> io::Result<()> {
    let json = serde_json::to_string_pretty(stats).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
