//! Header-indexed lookup over a spreadsheet grid.
//!
//! The grid is a sequence of rows of [`CellValue`]s, possibly ragged. A row
//! at a configured index supplies the column names; lookups resolve the
//! search and take columns against it, then scan rows in sheet order for the
//! first match.

use rowcall_model::{CellValue, LookupError};

/// Find the take-column cell of the first row whose search-column cell
/// matches `search_value`.
///
/// Column names match header cells by exact presentation string, always
/// case-sensitively. Value comparison folds Unicode case unless
/// `case_sensitive` is set. The scan runs over every grid row in sheet
/// order, the header row included, and skips rows too short to cover both
/// resolved columns. The returned cell keeps its native variant; only the
/// comparison is performed on the string form.
///
/// # Errors
///
/// Returns [`LookupError::HeadersNotFound`] when the grid has no row at
/// `header_row_index` or that row is empty,
/// [`LookupError::SearchColumnNotFound`] / [`LookupError::TakeColumnNotFound`]
/// when a configured column is absent from the header row, and
/// [`LookupError::ValueNotFound`] when no row matches.
pub fn lookup<'a>(
    grid: &'a [Vec<CellValue>],
    header_row_index: usize,
    search_column: &str,
    take_column: &str,
    search_value: &str,
    case_sensitive: bool,
) -> Result<&'a CellValue, LookupError> {
    let headers = grid
        .get(header_row_index)
        .filter(|row| !row.is_empty())
        .ok_or(LookupError::HeadersNotFound)?;

    let search_idx =
        column_index(headers, search_column).ok_or(LookupError::SearchColumnNotFound)?;
    let take_idx = column_index(headers, take_column).ok_or(LookupError::TakeColumnNotFound)?;

    scan_rows(grid, search_idx, take_idx, search_value, case_sensitive)
        .ok_or(LookupError::ValueNotFound)
}

/// Resolve a column name to its index within the header row.
///
/// Cells are compared by their presentation string; duplicate names resolve
/// to the first occurrence.
#[must_use]
pub fn column_index(headers: &[CellValue], name: &str) -> Option<usize> {
    headers.iter().position(|cell| cell.to_string() == name)
}

/// Scan rows in sheet order for the first search-column match and return its
/// take-column cell.
fn scan_rows<'a>(
    grid: &'a [Vec<CellValue>],
    search_idx: usize,
    take_idx: usize,
    search_value: &str,
    case_sensitive: bool,
) -> Option<&'a CellValue> {
    grid.iter()
        .filter(|row| row.len() > search_idx && row.len() > take_idx)
        .find(|row| eq_fold(&row[search_idx].to_string(), search_value, case_sensitive))
        .map(|row| &row[take_idx])
}

/// Compare two strings, folding Unicode case unless `case_sensitive` is set.
fn eq_fold(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
    }
}
