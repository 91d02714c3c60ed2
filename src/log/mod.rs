//! Access log ingestion.
//!
//! Turns the raw text of an access log into an ordered sequence of
//! [`LogRecord`]s.
//!
//! ## Submodules
//!
//! - [`format`]: Positional line layout ([`LineFormat`])
//! - [`record`]: The parsed record model ([`LogRecord`])
//! - [`parser`]: Line splitting and field extraction ([`Parser`])
//! - [`file`]: Reading the log file from disk ([`LogFile`])
//!
//! ## Data Flow
//!
//! ```text
//! LogFile::read_to_string()
//!        │
//!        ▼
//! Parser::parse()  ── LineFormat picks the token positions
//!        │
//!        ▼
//! Parsed { records: Vec<LogRecord>, skipped }
//! ```

pub mod file;
pub mod format;
pub mod parser;
pub mod record;

pub use file::LogFile;
pub use format::LineFormat;
pub use parser::{ParsePolicy, Parsed, Parser};
pub use record::{LogRecord, AUTH_FAILURE_MESSAGE, UNAUTHORIZED_STATUS};
