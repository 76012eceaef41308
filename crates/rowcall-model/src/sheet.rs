//! Value-range payload returned by the spreadsheet values API.

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// A block of cells in row-major order, as returned by `values.get`.
///
/// Rows are not padded: a trailing run of empty cells is simply absent from
/// its row, so rows may be shorter than the header row. A range with no data
/// at all omits the `values` key entirely, which deserializes to an empty
/// grid here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueRange {
    /// The range the values cover, in A1 notation.
    pub range: String,
    /// The dimension the values are organized by (`ROWS` for this service).
    pub major_dimension: String,
    /// The cell grid.
    pub values: Vec<Vec<CellValue>>,
}
