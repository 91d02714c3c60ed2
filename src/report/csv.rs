//! Sectioned CSV report.
//!
//! Layout, one section after another:
//!
//! ```text
//! Requests per IP:
//! IP Address,Request Count
//! 192.168.1.1,3
//! Most Accessed Endpoint:
//! Endpoint,Access Count
//! /login,3
//! Suspicious Activity Detected:
//! IP Address,Failed Login Count
//! 203.0.113.5,12
//! ```
//!
//! Rows have different widths, so the writer runs in flexible mode.

use std::io::Write;

use ::csv::WriterBuilder;

use super::{
    ENDPOINT_HEADING, NO_REQUESTS, NO_SUSPICIOUS_ACTIVITY, REQUESTS_HEADING, SUSPICIOUS_HEADING,
};
use crate::analysis::Analysis;
use crate::error::Result;

/// Write the three report sections as CSV.
pub fn write<W: Write>(analysis: &Analysis, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(writer);

    wtr.write_record([REQUESTS_HEADING])?;
    wtr.write_record(["IP Address", "Request Count"])?;
    for entry in &analysis.requests_per_ip {
        wtr.write_record([entry.ip.as_str(), entry.count.to_string().as_str()])?;
    }

    wtr.write_record([ENDPOINT_HEADING])?;
    wtr.write_record(["Endpoint", "Access Count"])?;
    match &analysis.top_endpoint {
        Some(top) => wtr.write_record([top.endpoint.as_str(), top.count.to_string().as_str()])?,
        None => wtr.write_record([NO_REQUESTS])?,
    }

    wtr.write_record([SUSPICIOUS_HEADING])?;
    if analysis.suspicious.is_empty() {
        wtr.write_record([NO_SUSPICIOUS_ACTIVITY])?;
    } else {
        wtr.write_record(["IP Address", "Failed Login Count"])?;
        for entry in &analysis.suspicious {
            wtr.write_record([entry.ip.as_str(), entry.failed_count.to_string().as_str()])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
