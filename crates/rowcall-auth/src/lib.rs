//! Webhook request signature verification for Rowcall.
//!
//! Inbound slash-command requests are authenticated with a time-bounded
//! HMAC scheme: the sender computes HMAC-SHA256 over
//! `"{version}:{timestamp}:{body}"` with a shared signing secret and sends
//! the lowercase-hex digest (prefixed with the version literal) plus the
//! timestamp as headers. This crate implements the verification side, and
//! the signing side for tests and clients.
//!
//! Verification is pure: it reads the supplied headers and body, performs no
//! I/O, and logs nothing. The caller owns all logging and response mapping.
//!
//! # Usage
//!
//! ```rust
//! use rowcall_auth::{SIGNATURE_HEADER, TIMESTAMP_HEADER, signature, verify};
//!
//! let secret = "8f742231b10e8888abcd99yyyzzz85a5";
//! let body = b"command=%2Fwhoami&user_id=U2CERLKJA";
//! let timestamp = chrono::Utc::now().timestamp();
//!
//! let mut headers = http::HeaderMap::new();
//! headers.insert(TIMESTAMP_HEADER, timestamp.to_string().parse().unwrap());
//! headers.insert(
//!     SIGNATURE_HEADER,
//!     signature(secret, timestamp, body).parse().unwrap(),
//! );
//!
//! assert!(verify(secret, &headers, body).is_ok());
//! ```

pub mod error;
pub mod verify;

pub use error::AuthError;
pub use verify::{
    SIGNATURE_HEADER, SIGNATURE_VERSION, TIMESTAMP_HEADER, TIMESTAMP_TOLERANCE_SECS, signature,
    verify,
};
