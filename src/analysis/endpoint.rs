//! Most accessed endpoint.

use serde::Serialize;

use super::tally;
use crate::error::{ReportError, Result};
use crate::log::LogRecord;

/// The endpoint with the most requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopEndpoint {
    pub endpoint: String,
    pub count: u64,
}

/// Find the endpoint requested most often.
///
/// When several endpoints share the highest count, the one that appeared
/// first in the log wins. Fails with [`ReportError::EmptyInput`] when
/// there are no records.
pub fn top_endpoint(records: &[LogRecord]) -> Result<TopEndpoint> {
    let mut best: Option<(&str, u64)> = None;
    for (endpoint, count) in tally(records.iter().map(|r| r.endpoint.as_str())) {
        // Strictly greater, so an earlier endpoint holds on to a tie.
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((endpoint, count));
        }
    }

    best.map(|(endpoint, count)| TopEndpoint {
        endpoint: endpoint.to_string(),
        count,
    })
    .ok_or(ReportError::EmptyInput)
}
