//! Aggregation passes over parsed log records.
//!
//! Each pass borrows the same immutable record slice and produces its own
//! result; none depends on another, so they may run in any order.
//!
//! - [`requests`]: request volume per client ([`IpCount`])
//! - [`endpoint`]: most accessed endpoint ([`TopEndpoint`])
//! - [`suspicious`]: clients over the failed-login threshold ([`SuspiciousIp`])

pub mod endpoint;
pub mod requests;
pub mod suspicious;

pub use endpoint::{top_endpoint, TopEndpoint};
pub use requests::{count_by_ip, IpCount};
pub use suspicious::{detect_suspicious, SuspiciousIp, DEFAULT_THRESHOLD};

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::log::{LogRecord, Parsed};

/// Results of all three passes over one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Records that went into the aggregates.
    pub total_records: usize,
    /// Lines dropped by a lenient parse.
    pub skipped_lines: usize,
    /// Threshold the suspicious pass was run with.
    pub threshold: u64,
    pub requests_per_ip: Vec<IpCount>,
    /// `None` when there were no records.
    pub top_endpoint: Option<TopEndpoint>,
    /// Empty when nobody crossed the threshold.
    pub suspicious: Vec<SuspiciousIp>,
}

impl Analysis {
    /// Run every pass over `records`.
    pub fn run(records: &[LogRecord], threshold: u64) -> Self {
        let requests_per_ip = count_by_ip(records);
        debug!(distinct_ips = requests_per_ip.len(), "Counted requests per IP");

        // The only failure is EmptyInput, which maps to an absent result.
        let top_endpoint = top_endpoint(records).ok();
        if let Some(top) = &top_endpoint {
            debug!(endpoint = %top.endpoint, count = top.count, "Found top endpoint");
        }

        let suspicious = detect_suspicious(records, threshold);
        info!(
            records = records.len(),
            flagged = suspicious.len(),
            threshold,
            "Analysis complete"
        );

        Self {
            total_records: records.len(),
            skipped_lines: 0,
            threshold,
            requests_per_ip,
            top_endpoint,
            suspicious,
        }
    }

    /// Run every pass over a parse result, carrying its skipped-line count.
    pub fn from_parsed(parsed: &Parsed, threshold: u64) -> Self {
        Self {
            skipped_lines: parsed.skipped,
            ..Self::run(&parsed.records, threshold)
        }
    }

    /// Number of distinct client addresses seen.
    pub fn distinct_ips(&self) -> usize {
        self.requests_per_ip.len()
    }
}

/// Count occurrences of each key, keeping keys in first-appearance order.
fn tally<'a, I>(keys: I) -> Vec<(&'a str, u64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, u64)> = Vec::new();

    for key in keys {
        match index.get(key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts
}

/// Tally and order by count descending.
///
/// The sort is stable, so equal counts keep first-appearance order.
fn ranked<'a, I>(keys: I) -> Vec<(&'a str, u64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = tally(keys);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a record with only the fields the passes look at.
    pub(crate) fn record(ip: &str, endpoint: &str, status: &str, failed: bool) -> LogRecord {
        LogRecord {
            ip: ip.to_string(),
            method: "GET".to_string(),
            endpoint: endpoint.to_string(),
            status: status.to_string(),
            is_auth_failure: failed,
        }
    }

    #[test]
    fn test_tally_keeps_first_appearance_order() {
        let counts = tally(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_ranked_ties_keep_first_appearance() {
        let counts = ranked(["x", "y", "z", "y", "x", "w"]);
        assert_eq!(counts, vec![("x", 2), ("y", 2), ("z", 1), ("w", 1)]);
    }

    #[test]
    fn test_analysis_run_on_empty_input() {
        let analysis = Analysis::run(&[], DEFAULT_THRESHOLD);
        assert_eq!(analysis.total_records, 0);
        assert!(analysis.requests_per_ip.is_empty());
        assert!(analysis.top_endpoint.is_none());
        assert!(analysis.suspicious.is_empty());
    }

    #[test]
    fn test_analysis_run_is_idempotent() {
        let records = vec![
            record("1.1.1.1", "/a", "200", false),
            record("2.2.2.2", "/login", "401", true),
            record("2.2.2.2", "/login", "401", true),
            record("1.1.1.1", "/a", "200", false),
        ];
        assert_eq!(Analysis::run(&records, 1), Analysis::run(&records, 1));
    }

    #[test]
    fn test_analysis_from_parsed_carries_skipped() {
        let parsed = Parsed {
            records: vec![record("1.1.1.1", "/a", "200", false)],
            skipped: 3,
        };
        let analysis = Analysis::from_parsed(&parsed, 10);
        assert_eq!(analysis.skipped_lines, 3);
        assert_eq!(analysis.total_records, 1);
        assert_eq!(analysis.distinct_ips(), 1);
        assert_eq!(analysis.threshold, 10);
    }
}
