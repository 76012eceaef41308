//! Shared model types for Rowcall.
//!
//! This crate holds the data shapes that cross crate boundaries: the
//! dynamically typed spreadsheet cell, the value-range grid the spreadsheet
//! API returns, the slash-command webhook payload, and the closed lookup
//! error taxonomy. It contains no I/O and no business logic.

pub mod cell;
pub mod command;
pub mod error;
pub mod sheet;

pub use cell::CellValue;
pub use command::{CommandReply, SlashCommand};
pub use error::LookupError;
pub use sheet::ValueRange;
