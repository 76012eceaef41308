//! Rowcall business logic.
//!
//! Hosts the header-indexed table lookup, the environment-driven service
//! configuration, and the slash-command handler that ties identity
//! resolution, grid fetching, and lookup together.

pub mod config;
pub mod error;
pub mod handler;
pub mod lookup;

pub use config::RowcallConfig;
pub use error::RowcallError;
pub use handler::RowcallHandler;
pub use lookup::lookup;
