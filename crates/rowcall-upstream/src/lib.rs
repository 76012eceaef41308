//! Upstream API clients for Rowcall.
//!
//! Two collaborators sit behind traits so the command handler can be tested
//! with in-memory fakes:
//!
//! - [`GridSource`] - fetches the tabular dataset; implemented by
//!   [`SheetsClient`] against the spreadsheet `values.get` endpoint.
//! - [`IdentityResolver`] - resolves a platform user id to an email address;
//!   implemented by [`SlackClient`] against `users.profile.get`.
//!
//! Neither client retries or caches: every slash command fetches the grid
//! fresh, which keeps the data live and the clients stateless.

pub mod error;
pub mod sheets;
pub mod slack;

pub use error::UpstreamError;
pub use sheets::{GridSource, SheetsClient};
pub use slack::{IdentityResolver, SlackClient};
