//! JSON export of an analysis.

use std::io::Write;

use crate::analysis::Analysis;
use crate::error::Result;

/// Write the analysis as pretty-printed JSON followed by a newline.
pub fn write<W: Write>(analysis: &Analysis, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, analysis)?;
    writeln!(writer)?;
    Ok(())
}
