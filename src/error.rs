//! Error types for the report pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a report run.
///
/// There is no partial-result recovery: every aggregate is derived from a
/// single parse, so any of these ends the run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input log file is missing or unreadable.
    #[error("Cannot read log file {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line has too few tokens to extract the required fields.
    #[error("Malformed log line {line}: expected at least {expected} tokens, found {found}")]
    MalformedLine {
        /// 1-based line number in the input file.
        line: usize,
        expected: usize,
        found: usize,
    },

    /// No records were parsed, so there is no most accessed endpoint.
    #[error("No log records to analyze")]
    EmptyInput,

    /// Configuration could not be loaded or deserialized.
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// Writing the CSV report failed.
    #[error("Failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),

    /// Serializing the JSON report failed.
    #[error("Failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_message_names_line() {
        let err = ReportError::MalformedLine {
            line: 7,
            expected: 9,
            found: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("found 3"));
    }

    #[test]
    fn test_file_not_found_names_path() {
        let err = ReportError::FileNotFound {
            path: PathBuf::from("missing.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.log"));
    }
}
