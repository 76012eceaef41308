//! Webhook HTTP service layer for Rowcall.
//!
//! This crate implements the inbound webhook surface:
//!
//! - **Service**: hyper `Service` implementation driving the request
//!   pipeline (health probe, method gate, signature gate, form decode,
//!   dispatch)
//! - **Handler trait**: the boundary between the HTTP transport and the
//!   command-handling business logic
//! - **Command decoding**: `application/x-www-form-urlencoded` slash-command
//!   parsing
//! - **Response helpers**: plain-text success and empty error responses

pub mod body;
pub mod command;
pub mod dispatch;
pub mod response;
pub mod service;

pub use body::ReplyBody;
pub use command::{CommandParseError, parse_slash_command};
pub use dispatch::SlashHandler;
pub use service::{HEALTH_PATH, RowcallHttpConfig, RowcallService};
