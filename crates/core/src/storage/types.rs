use serde::Deserialize;

/// Default number of rows to skip when listing.
pub const DEFAULT_SKIP: i64 = 0;

/// Default maximum number of rows returned when listing.
pub const DEFAULT_LIMIT: i64 = 100;

/// Offset/limit window over the items table.
///
/// Values are passed to storage untouched. SQLite treats a negative
/// `limit` as "no limit" and a negative `skip` as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(default = "default_skip")]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_skip() -> i64 {
    DEFAULT_SKIP
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Page {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    /// Returns the `(start, end)` slice bounds of this window over `len`
    /// rows, following SQLite's handling of negative values.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = usize::try_from(self.skip.max(0)).unwrap_or(usize::MAX).min(len);
        let end = if self.limit < 0 {
            len
        } else {
            let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
            start.saturating_add(limit).min(len)
        };
        (start, end)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP, DEFAULT_LIMIT)
    }
}
