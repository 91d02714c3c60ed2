//! File-backed log input.
//!
//! Reads the whole access log into memory in one go; nothing is parsed
//! until the read has completed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::parser::{Parsed, Parser};
use crate::error::{ReportError, Result};

/// An access log on disk.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
    description: String,
}

impl LogFile {
    /// Create a handle for the given path. The file is not touched yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a human-readable description of the source.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Read the full file content.
    ///
    /// Any I/O failure (missing file, permissions, invalid UTF-8) is
    /// reported as [`ReportError::FileNotFound`].
    pub fn read_to_string(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| ReportError::FileNotFound {
            path: self.path.clone(),
            source,
        })
    }

    /// Read and parse the file.
    pub fn load(&self, parser: &Parser) -> Result<Parsed> {
        let content = self.read_to_string()?;
        info!(source = %self.description, bytes = content.len(), "Loaded access log");
        parser.parse_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_log() -> &'static str {
        r#"192.168.1.1 - - [03/Dec/2024:10:12:34 +0000] "GET /home HTTP/1.1" 200 512
203.0.113.5 - - [03/Dec/2024:10:12:35 +0000] "POST /login HTTP/1.1" 401 128 "Invalid credentials""#
    }

    #[test]
    fn test_log_file_new() {
        let file = LogFile::new("/tmp/access.log");
        assert_eq!(file.path(), Path::new("/tmp/access.log"));
        assert_eq!(file.description(), "file: /tmp/access.log");
    }

    #[test]
    fn test_log_file_load_parses_records() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_log()).unwrap();

        let parsed = LogFile::new(file.path()).load(&Parser::default()).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1].endpoint, "/login");
        assert!(parsed.records[1].is_failed_login());
    }

    #[test]
    fn test_log_file_missing_file() {
        let err = LogFile::new("/nonexistent/path/access.log")
            .load(&Parser::default())
            .unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/path/access.log"));
    }

    #[test]
    fn test_log_file_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let parsed = LogFile::new(file.path()).load(&Parser::default()).unwrap();
        assert!(parsed.records.is_empty());
    }
}
