//! Service-level errors.

/// Errors surfaced during startup and request handling glue.
///
/// The lookup and signature cores carry their own precise error types; this
/// one covers configuration problems and everything wrapped up by `anyhow`
/// on the way out.
#[derive(Debug, thiserror::Error)]
pub enum RowcallError {
    /// Configuration is incomplete or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Any other internal failure.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_config_error_with_detail() {
        let err = RowcallError::Config("SLACK_SIGNING_SECRET must be set".to_owned());
        assert_eq!(
            err.to_string(),
            "invalid configuration: SLACK_SIGNING_SECRET must be set"
        );
    }

    #[test]
    fn test_should_wrap_anyhow_errors_transparently() {
        let err = RowcallError::from(anyhow::anyhow!("listener gone"));
        assert_eq!(err.to_string(), "listener gone");
    }
}
