//! Output formatting for reports.
//!
//! This module handles formatting and outputting evaluation reports:
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
pub mod terminal;

pub use json::write_report_json;
pub use terminal::{format_label, write_report};
