//! Lookup failure taxonomy.

/// Why a table lookup failed.
///
/// Each variant is a stable, comparable identity so callers branch on kind
/// rather than message text. The first three indicate the sheet no longer
/// matches the configured column names; the last that no row carries the
/// search value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The grid has no header row at the configured index, or that row is
    /// empty.
    #[error("headers not found")]
    HeadersNotFound,
    /// No header cell matches the configured search column name.
    #[error("search column not found")]
    SearchColumnNotFound,
    /// No header cell matches the configured take column name.
    #[error("take column not found")]
    TakeColumnNotFound,
    /// No row's search cell matched the search value.
    #[error("value not found")]
    ValueNotFound,
}

impl LookupError {
    /// True when the failure points at operator-side schema drift (changed
    /// or missing columns) rather than a missing user.
    #[must_use]
    pub fn is_schema_drift(self) -> bool {
        !matches!(self, Self::ValueNotFound)
    }
}
