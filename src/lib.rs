//! # access-log-report
//!
//! A batch report generator for web-server access logs.
//!
//! One run reads an access log, then reports:
//!
//! - how many requests each client IP made,
//! - which endpoint was requested most often,
//! - which IPs failed to log in more often than a configurable threshold.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌────────────┐    ┌──────────┐
//! │ LogFile  │───▶│  Parser  │───▶│  Analysis  │───▶│  report  │
//! │ (input)  │    │ (records)│    │ (3 passes) │    │ (output) │
//! └──────────┘    └──────────┘    └────────────┘    └──────────┘
//! ```
//!
//! - **[`log`]**: the [`LogRecord`] model, the positional [`LineFormat`], the
//!   [`Parser`] and the [`LogFile`] reader
//! - **[`analysis`]**: per-IP counts, top endpoint and failed-login
//!   detection, bundled as an [`Analysis`]
//! - **[`report`]**: console text, the CSV report file and a JSON export
//! - **[`config`]**: layered [`Settings`] (defaults, file, environment)
//!
//! ## Example
//!
//! ```
//! use access_log_report::{Analysis, Parser};
//!
//! let log = "\
//! 10.0.0.1 - - [03/Dec/2024:10:12:34 +0000] \"POST /login HTTP/1.1\" 401 128 \"Invalid credentials\"
//! 10.0.0.1 - - [03/Dec/2024:10:12:35 +0000] \"POST /login HTTP/1.1\" 401 128 \"Invalid credentials\"
//! 10.0.0.2 - - [03/Dec/2024:10:12:36 +0000] \"GET /home HTTP/1.1\" 200 512";
//!
//! let parsed = Parser::default().parse_str(log).unwrap();
//! let analysis = Analysis::from_parsed(&parsed, 1);
//!
//! assert_eq!(analysis.requests_per_ip[0].ip, "10.0.0.1");
//! assert_eq!(analysis.top_endpoint.unwrap().endpoint, "/login");
//! assert_eq!(analysis.suspicious[0].failed_count, 2);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod log;
pub mod logging;
pub mod pipeline;
pub mod report;

pub use analysis::{
    count_by_ip, detect_suspicious, top_endpoint, Analysis, IpCount, SuspiciousIp, TopEndpoint,
    DEFAULT_THRESHOLD,
};
pub use config::Settings;
pub use error::{ReportError, Result};
pub use log::{LineFormat, LogFile, LogRecord, ParsePolicy, Parsed, Parser};
pub use report::ReportFormat;
