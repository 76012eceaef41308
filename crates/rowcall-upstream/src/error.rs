//! Error types for the upstream API clients.

/// Errors surfaced by the spreadsheet and identity collaborators.
///
/// These are always server-side failures from the webhook caller's point of
/// view; the handler logs them and answers with an error status, never with
/// upstream detail in the response body.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP exchange itself failed (connect, timeout, body decode).
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status code.
    #[error("{endpoint} answered {status}")]
    Status {
        /// Which collaborator answered.
        endpoint: &'static str,
        /// The status it answered with.
        status: reqwest::StatusCode,
    },

    /// The platform API answered `ok: false` with an error code.
    #[error("platform API error: {0}")]
    Api(String),

    /// The resolved profile carries no email address.
    #[error("no email on profile for user {0}")]
    MissingEmail(String),
}
