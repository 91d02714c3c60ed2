//! Report rendering.
//!
//! An [`Analysis`] is rendered twice per run: once to the console in a
//! readable form, and once to a report file in the configured
//! [`ReportFormat`].
//!
//! - [`console`]: human-readable text for stdout
//! - [`csv`]: the sectioned CSV report file
//! - [`json`]: a JSON export of the full analysis

pub mod console;
pub mod csv;
pub mod json;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::Analysis;
use crate::error::Result;

/// Section heading for the per-IP table.
pub const REQUESTS_HEADING: &str = "Requests per IP:";
/// Section heading for the top endpoint.
pub const ENDPOINT_HEADING: &str = "Most Accessed Endpoint:";
/// Section heading for flagged clients.
pub const SUSPICIOUS_HEADING: &str = "Suspicious Activity Detected:";
/// Written in place of the suspicious table when nobody was flagged.
pub const NO_SUSPICIOUS_ACTIVITY: &str = "No suspicious activity detected.";
/// Written in place of the endpoint row when the log had no records.
pub const NO_REQUESTS: &str = "No requests recorded.";

/// Encoding of the report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Three labeled CSV sections.
    #[default]
    Csv,
    /// Pretty-printed JSON of the whole analysis.
    Json,
}

/// Render the report in `format` to any writer.
pub fn render<W: Write>(analysis: &Analysis, format: ReportFormat, writer: W) -> Result<()> {
    match format {
        ReportFormat::Csv => csv::write(analysis, writer),
        ReportFormat::Json => json::write(analysis, writer),
    }
}

/// Write the report file, replacing any existing file at `path`.
pub fn write_report(analysis: &Analysis, format: ReportFormat, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    render(analysis, format, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), ?format, "Report written");
    Ok(())
}
