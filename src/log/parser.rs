//! Access log line parser.
//!
//! Splits each line on whitespace and picks fields by position according
//! to a [`LineFormat`].

use tracing::{debug, warn};

use super::format::LineFormat;
use super::record::{LogRecord, AUTH_FAILURE_MESSAGE};
use crate::error::{ReportError, Result};

/// What to do with a line that has too few tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Abort the whole parse with [`ReportError::MalformedLine`].
    #[default]
    FailFast,
    /// Drop the line, log a warning and keep going.
    SkipMalformed,
}

/// Output of a parse: records in file order plus the number of dropped lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub records: Vec<LogRecord>,
    /// Lines dropped under [`ParsePolicy::SkipMalformed`]. Always 0 for
    /// [`ParsePolicy::FailFast`].
    pub skipped: usize,
}

/// Converts raw log lines into [`LogRecord`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    format: LineFormat,
    policy: ParsePolicy,
}

impl Parser {
    pub fn new(format: LineFormat, policy: ParsePolicy) -> Self {
        Self { format, policy }
    }

    pub fn format(&self) -> &LineFormat {
        &self.format
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    /// Parse a single line.
    ///
    /// `line_no` is the 1-based position of the line in its file and is
    /// only used to label the error.
    pub fn parse_line(&self, line_no: usize, line: &str) -> Result<LogRecord> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let expected = self.format.min_tokens();
        if tokens.len() < expected {
            return Err(ReportError::MalformedLine {
                line: line_no,
                expected,
                found: tokens.len(),
            });
        }

        Ok(LogRecord {
            ip: tokens[self.format.ip].to_string(),
            method: strip_first_char(tokens[self.format.method]).to_string(),
            endpoint: tokens[self.format.endpoint].to_string(),
            status: tokens[self.format.status].to_string(),
            is_auth_failure: line.contains(AUTH_FAILURE_MESSAGE),
        })
    }

    /// Parse every line, preserving input order.
    ///
    /// Whitespace-only lines carry no record and are passed over under
    /// either policy; they still count toward line numbering.
    pub fn parse<'a, I>(&self, lines: I) -> Result<Parsed>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut parsed = Parsed::default();

        for (idx, line) in lines.into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match self.parse_line(idx + 1, line) {
                Ok(record) => parsed.records.push(record),
                Err(ReportError::MalformedLine {
                    line: line_no,
                    found,
                    ..
                }) if self.policy == ParsePolicy::SkipMalformed => {
                    warn!(line = line_no, tokens = found, "Skipping malformed log line");
                    parsed.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            records = parsed.records.len(),
            skipped = parsed.skipped,
            "Parsed access log"
        );
        Ok(parsed)
    }

    /// Parse a whole log held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Parsed> {
        self.parse(content.lines())
    }
}

/// Drop the opening quote from a method token like `"GET`.
fn strip_first_char(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.as_str()
}
