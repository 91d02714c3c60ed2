//! Request volume per client address.

use serde::Serialize;

use super::ranked;
use crate::log::LogRecord;

/// Number of requests made by one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpCount {
    pub ip: String,
    pub count: u64,
}

/// Count records per IP, busiest first.
///
/// Ties keep the order in which the IPs first appeared in the log.
pub fn count_by_ip(records: &[LogRecord]) -> Vec<IpCount> {
    ranked(records.iter().map(|r| r.ip.as_str()))
        .into_iter()
        .map(|(ip, count)| IpCount {
            ip: ip.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::record;

    #[test]
    fn test_count_by_ip_orders_by_count() {
        let records = vec![
            record("10.0.0.1", "/", "200", false),
            record("10.0.0.2", "/", "200", false),
            record("10.0.0.2", "/", "200", false),
            record("10.0.0.3", "/", "200", false),
            record("10.0.0.2", "/", "200", false),
            record("10.0.0.3", "/", "200", false),
        ];
        let counts = count_by_ip(&records);
        let pairs: Vec<(&str, u64)> = counts.iter().map(|c| (c.ip.as_str(), c.count)).collect();
        assert_eq!(pairs, [("10.0.0.2", 3), ("10.0.0.3", 2), ("10.0.0.1", 1)]);
    }

    #[test]
    fn test_count_by_ip_ties_in_first_seen_order() {
        let records = vec![
            record("b", "/", "200", false),
            record("a", "/", "200", false),
            record("a", "/", "200", false),
            record("b", "/", "200", false),
        ];
        let counts = count_by_ip(&records);
        assert_eq!(counts[0].ip, "b");
        assert_eq!(counts[1].ip, "a");
    }

    #[test]
    fn test_count_by_ip_sums_to_record_total() {
        let records: Vec<LogRecord> = (0..25)
            .map(|i| record(&format!("10.0.0.{}", i % 7), "/", "200", false))
            .collect();
        let total: u64 = count_by_ip(&records).iter().map(|c| c.count).sum();
        assert_eq!(total, records.len() as u64);
    }

    #[test]
    fn test_count_by_ip_empty() {
        assert!(count_by_ip(&[]).is_empty());
    }
}
