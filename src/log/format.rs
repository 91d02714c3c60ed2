//! Positional layout of an access log line.

/// Maps each extracted field to its whitespace-separated token position.
///
/// Positions are 0-based. For the common log layout
///
/// ```text
/// 192.168.1.1 - - [03/Dec/2024:10:12:34 +0000] "GET /home HTTP/1.1" 200 512
/// ```
///
/// the date splits into two tokens, so the quoted method lands at 5, the
/// path at 6 and the status code at 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormat {
    pub ip: usize,
    pub method: usize,
    pub endpoint: usize,
    pub status: usize,
}

impl LineFormat {
    /// Common/combined log format as written by Apache and nginx.
    pub const COMMON: LineFormat = LineFormat {
        ip: 0,
        method: 5,
        endpoint: 6,
        status: 8,
    };

    /// Fewest tokens a line needs for every field to be present.
    pub fn min_tokens(&self) -> usize {
        self.ip
            .max(self.method)
            .max(self.endpoint)
            .max(self.status)
            + 1
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::COMMON
    }
}
