//! Non-interactive scan output: plain listing and traversal warnings

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::error::TraversalError;
use crate::scan::ScanReport;

/// Print one root-relative path per line, in traversal order.
pub fn print_listing<W: WriteColor + ?Sized>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    for record in &report.records {
        writeln!(out, "{}", record.relative_path().display())?;
    }
    if !report.complete {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "(scan interrupted)")?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print each traversal error as a warning line.
pub fn print_traversal_errors<W: WriteColor + ?Sized>(
    out: &mut W,
    errors: &[TraversalError],
) -> io::Result<()> {
    for error in errors {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "picwalk: warning:")?;
        out.reset()?;
        writeln!(out, " {}", error)?;
    }
    Ok(())
}
