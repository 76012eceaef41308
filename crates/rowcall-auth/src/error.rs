//! Error types for webhook signature verification.

/// Errors that can occur while verifying a signed webhook request.
///
/// All variants except [`AuthError::EmptySecret`] mean the request failed
/// authentication; `EmptySecret` means the verifier itself is unusable and
/// is a server-side fault. Display strings never echo secrets or signature
/// material.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required signing header is missing or not valid UTF-8.
    #[error("missing required header: {0}")]
    MissingHeader(&'static str),

    /// The timestamp header is not a unix timestamp in seconds.
    #[error("invalid signing timestamp")]
    InvalidTimestamp,

    /// The signing timestamp is outside the accepted window, in either
    /// direction.
    #[error("signing timestamp outside the accepted window")]
    StaleTimestamp,

    /// The computed signature does not match the provided signature.
    #[error("signature does not match")]
    SignatureMismatch,

    /// The configured signing secret is empty.
    #[error("signing secret is empty")]
    EmptySecret,
}

impl AuthError {
    /// True for failures the transport should answer with an unauthorized
    /// status; the remaining case is an internal server fault.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, Self::EmptySecret)
    }
}
