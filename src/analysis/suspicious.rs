//! Failed-login detection.

use serde::Serialize;

use super::ranked;
use crate::log::LogRecord;

/// Failed-login count an IP must exceed before it is flagged.
pub const DEFAULT_THRESHOLD: u64 = 10;

/// A client with too many failed logins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspiciousIp {
    pub ip: String,
    pub failed_count: u64,
}

/// Flag IPs whose failed-login count is strictly greater than `threshold`.
///
/// Only 401 responses carrying the "Invalid credentials" message count.
/// An IP sitting exactly at the threshold is not flagged. Output is ordered
/// by failed count descending, ties in first-appearance order.
pub fn detect_suspicious(records: &[LogRecord], threshold: u64) -> Vec<SuspiciousIp> {
    ranked(
        records
            .iter()
            .filter(|r| r.is_failed_login())
            .map(|r| r.ip.as_str()),
    )
    .into_iter()
    .filter(|&(_, failed)| failed > threshold)
    .map(|(ip, failed_count)| SuspiciousIp {
        ip: ip.to_string(),
        failed_count,
    })
    .collect()
}
