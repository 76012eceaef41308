//! Spreadsheet cell values.
//!
//! The values API returns dynamically typed cells: a cell may hold a string,
//! a number, a boolean, or nothing at all. [`CellValue`] is the closed set of
//! those shapes. The untagged serde representation matches the raw JSON wire
//! form (`"Jane"`, `200`, `30.5`, `true`, `null`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell.
///
/// Search matching is performed on the presentation string (the `Display`
/// form); the cell itself keeps its native type, so a looked-up number stays
/// a number.
///
/// Variant order matters for deserialization: integer JSON numbers must be
/// tried as `Int` before falling through to `Float`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// An empty cell.
    #[default]
    Null,
    /// A boolean cell.
    Bool(bool),
    /// A number cell with an integral value.
    Int(i64),
    /// Any other number cell.
    Float(f64),
    /// A text cell.
    Text(String),
}

impl CellValue {
    /// Returns `true` if this is an empty cell.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text if this is a `Text` cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int` cell.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool` cell.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    /// The presentation string: what a user sees in the sheet cell.
    ///
    /// Empty cells present as the empty string, so they never match a
    /// non-empty search value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
