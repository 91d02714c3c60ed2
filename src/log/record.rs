//! Parsed access log record.

use serde::Serialize;

/// Literal text that marks a line as a failed authentication attempt.
pub const AUTH_FAILURE_MESSAGE: &str = "Invalid credentials";

/// Status code text of an unauthorized response.
pub const UNAUTHORIZED_STATUS: &str = "401";

/// One access log line with its extracted fields.
///
/// Every record corresponds to exactly one input line. Fields are kept as
/// the literal log text; `status` in particular is not converted to a
/// number, so non-numeric codes never fail a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Client address.
    pub ip: String,
    /// HTTP method with the leading quote removed.
    pub method: String,
    /// Requested path.
    pub endpoint: String,
    /// HTTP status code text.
    pub status: String,
    /// Set when [`AUTH_FAILURE_MESSAGE`] appears anywhere in the raw line.
    ///
    /// This is a plain substring match over the whole line, not a field
    /// read from a fixed column.
    pub is_auth_failure: bool,
}

impl LogRecord {
    /// The annotation carried by this record: the failure message when
    /// flagged, otherwise an empty string.
    pub fn message(&self) -> &'static str {
        if self.is_auth_failure {
            AUTH_FAILURE_MESSAGE
        } else {
            ""
        }
    }

    /// A 401 response that also carries the failure message.
    pub fn is_failed_login(&self) -> bool {
        self.status == UNAUTHORIZED_STATUS && self.is_auth_failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: &str, is_auth_failure: bool) -> LogRecord {
        LogRecord {
            ip: "10.0.0.1".to_string(),
            method: "POST".to_string(),
            endpoint: "/login".to_string(),
            status: status.to_string(),
            is_auth_failure,
        }
    }

    #[test]
    fn test_message_reflects_flag() {
        assert_eq!(record("401", true).message(), "Invalid credentials");
        assert_eq!(record("401", false).message(), "");
    }

    #[test]
    fn test_failed_login_needs_status_and_message() {
        assert!(record("401", true).is_failed_login());
        assert!(!record("401", false).is_failed_login());
        assert!(!record("403", true).is_failed_login());
        assert!(!record("200", true).is_failed_login());
    }
}
