//! Console rendering.

use std::fmt::Write;

use super::{
    ENDPOINT_HEADING, NO_REQUESTS, NO_SUSPICIOUS_ACTIVITY, REQUESTS_HEADING, SUSPICIOUS_HEADING,
};
use crate::analysis::Analysis;

/// Width of the address column.
const IP_WIDTH: usize = 20;

/// Render the analysis as readable text for stdout.
pub fn render(analysis: &Analysis) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "Analyzed {} records from {} distinct IPs",
        analysis.total_records,
        analysis.distinct_ips()
    );
    if analysis.skipped_lines > 0 {
        let _ = write!(out, " ({} malformed lines skipped)", analysis.skipped_lines);
    }
    out.push_str("\n\n");

    let _ = writeln!(out, "{REQUESTS_HEADING}");
    for entry in &analysis.requests_per_ip {
        let _ = writeln!(out, "{:<IP_WIDTH$} {}", entry.ip, entry.count);
    }

    let _ = writeln!(out, "\n{ENDPOINT_HEADING}");
    match &analysis.top_endpoint {
        Some(top) => {
            let _ = writeln!(out, "{} (Accessed {} times)", top.endpoint, top.count);
        }
        None => {
            let _ = writeln!(out, "{NO_REQUESTS}");
        }
    }

    let _ = writeln!(out, "\n{SUSPICIOUS_HEADING}");
    if analysis.suspicious.is_empty() {
        let _ = writeln!(out, "{NO_SUSPICIOUS_ACTIVITY}");
    } else {
        for entry in &analysis.suspicious {
            let _ = writeln!(out, "{:<IP_WIDTH$} {} failed logins", entry.ip, entry.failed_count);
        }
    }

    out
}

/// Print the analysis to stdout.
pub fn print(analysis: &Analysis) {
    print!("{}", render(analysis));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::record;

    #[test]
    fn test_endpoint_line_shape() {
        let records = vec![
            record("1.1.1.1", "/login", "200", false),
            record("1.1.1.1", "/login", "200", false),
            record("1.1.1.1", "/login", "200", false),
            record("2.2.2.2", "/home", "200", false),
        ];
        let out = render(&Analysis::run(&records, 10));
        assert!(out.contains("Most Accessed Endpoint:\n/login (Accessed 3 times)\n"));
    }

    #[test]
    fn test_sections_present_in_order() {
        let records = vec![record("1.1.1.1", "/", "200", false)];
        let out = render(&Analysis::run(&records, 10));

        let requests = out.find(REQUESTS_HEADING).unwrap();
        let endpoint = out.find(ENDPOINT_HEADING).unwrap();
        let suspicious = out.find(SUSPICIOUS_HEADING).unwrap();
        assert!(requests < endpoint && endpoint < suspicious);
        assert!(out.contains(NO_SUSPICIOUS_ACTIVITY));
    }

    #[test]
    fn test_flagged_ips_listed() {
        let records: Vec<_> = (0..4)
            .map(|_| record("203.0.113.5", "/login", "401", true))
            .collect();
        let out = render(&Analysis::run(&records, 3));
        assert!(out.contains("203.0.113.5"));
        assert!(out.contains("4 failed logins"));
        assert!(!out.contains(NO_SUSPICIOUS_ACTIVITY));
    }

    #[test]
    fn test_empty_log() {
        let out = render(&Analysis::run(&[], 10));
        assert!(out.starts_with("Analyzed 0 records from 0 distinct IPs\n"));
        assert!(out.contains(NO_REQUESTS));
    }
}
