//! Metadata block shown for each image during a session

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::error::DecodeError;
use crate::nav::BINDINGS;
use crate::nav::Outcome;
use crate::scan::{Dimensions, ImageRecord};

use super::utils::{
    LABEL_WIDTH, format_megabytes, format_number, format_timestamp, write_heading, write_row,
};

const RULE_WIDTH: usize = 80;

/// Print the metadata block for `record`.
///
/// `position` is zero-based. Pixel rows are only shown once the image has been
/// decoded; `fitted` is the size it was scaled to for display, if any.
pub fn print_record<W: WriteColor + ?Sized>(
    out: &mut W,
    record: &ImageRecord,
    position: usize,
    total: usize,
    fitted: Option<Dimensions>,
) -> io::Result<()> {
    let meta = record.metadata();

    writeln!(out)?;
    write_heading(
        out,
        &format!("Displaying image {} of {}:", position + 1, total),
    )?;

    write_row(out, "File Name", &record.file_stem())?;
    write_row(out, "File Path", &record.relative_path().display().to_string())?;
    write_row(out, "Full Path", &record.path().display().to_string())?;
    write_row(out, "File Type", &record.extension())?;
    write_row(out, "Format", record.format().name())?;

    write_row(out, "Mode", &format!("{:o}", meta.mode))?;
    write_row(out, "Inode", &meta.inode.to_string())?;
    write_row(out, "Device", &meta.device.to_string())?;
    write_row(out, "Links", &meta.links.to_string())?;
    write_row(out, "User ID", &meta.uid.to_string())?;
    write_row(out, "Group ID", &meta.gid.to_string())?;
    write_row(out, "Access Time", &format_timestamp(meta.accessed))?;
    write_row(out, "Mod Time", &format_timestamp(meta.modified))?;
    write_row(out, "Create Time", &format_timestamp(meta.created))?;
    write_row(
        out,
        "Size (Bytes)",
        &format!("{} bytes", format_number(meta.size)),
    )?;
    write_row(out, "Size (MB)", &format_megabytes(meta.size))?;

    if let Some(dims) = record.dimensions() {
        write_row(out, "Size (Width)", &dims.width.to_string())?;
        write_row(out, "Size (Height)", &dims.height.to_string())?;
        write_row(out, "Pixels", &format_number(dims.pixels()))?;
    }
    if let Some(fitted) = fitted {
        write_row(
            out,
            "Display Size",
            &format!("{}x{}", fitted.width, fitted.height),
        )?;
    }

    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Print the key bindings.
pub fn print_commands<W: WriteColor + ?Sized>(out: &mut W) -> io::Result<()> {
    write_heading(out, "Commands:")?;
    for (action, keys) in BINDINGS {
        write_row(out, action, keys)?;
    }
    Ok(())
}

/// Print the hint for a navigation outcome that did not move the cursor.
///
/// Moves and quits print nothing.
pub fn print_hint<W: WriteColor + ?Sized>(out: &mut W, outcome: Outcome) -> io::Result<()> {
    let message = match outcome {
        Outcome::AtEnd => "End of files reached.",
        Outcome::AtStart => "This is the first image.",
        Outcome::UnknownCommand => {
            "Unknown command. Use 'space' or 'n' for next image, 'p' for previous image, 'q' to quit."
        }
        Outcome::Moved(_) | Outcome::Quit => return Ok(()),
    };
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    write!(out, "{}", message)?;
    out.reset()?;
    writeln!(out)
}

/// Report an image that could not be shown.
pub fn print_decode_failure<W: WriteColor + ?Sized>(
    out: &mut W,
    error: &DecodeError,
) -> io::Result<()> {
    writeln!(out)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "{:<width$}", "Skipped", width = LABEL_WIDTH + 2)?;
    out.reset()?;
    writeln!(out, "{}", error)
}
