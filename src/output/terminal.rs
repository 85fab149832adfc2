//! Terminal output utilities.
//!
//! Provides colored `Label: value` lines for reports and prompts.

use crate::models::Report;
use colored::{ColoredString, Colorize};
use crossterm::{cursor, terminal, QueueableCommand};
use std::io::{self, Write};

pub const HEADER: &str = "=== Subnet Calculator ===";

/// Format one `Label: value` line.
pub fn format_label(label: &str, value: &str) -> String {
    format!("{} {}", format!("{label}:").bright_blue(), value.bright_white())
}

/// Write every field of a report, one per line.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    for (label, value) in report.fields() {
        writeln!(out, "{}", format_label(label, &value))?;
    }
    Ok(())
}

pub fn header() -> ColoredString {
    HEADER.bright_magenta()
}

pub fn prompt(text: &str) -> ColoredString {
    text.bright_cyan()
}

pub fn error(text: &str) -> ColoredString {
    format!("Error: {text}").bright_red()
}

/// Clear the screen and home the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?
        .queue(cursor::MoveTo(0, 0))?;
    out.flush()
}
