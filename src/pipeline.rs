//! Load, parse and analyze in one call.

use tracing::info;

use crate::analysis::Analysis;
use crate::config::Settings;
use crate::error::Result;
use crate::log::{LineFormat, LogFile, Parser};

/// Read the configured log file and run every aggregation pass.
///
/// The whole file is parsed before any pass starts, and any parse failure
/// aborts the run.
pub fn analyze(settings: &Settings) -> Result<Analysis> {
    let parser = Parser::new(LineFormat::COMMON, settings.parse_policy());
    let parsed = LogFile::new(&settings.input).load(&parser)?;
    info!(
        records = parsed.records.len(),
        skipped = parsed.skipped,
        "Parsed log records"
    );
    Ok(Analysis::from_parsed(&parsed, settings.threshold))
}
