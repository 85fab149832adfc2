//! JSON output for reports.

use crate::models::Report;
use std::io::{self, Write};

/// Write a report as pretty-printed JSON followed by a newline.
pub fn write_report_json<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
