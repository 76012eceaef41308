//! Slash-command webhook payloads.
//!
//! The chat platform posts these fields as `application/x-www-form-urlencoded`
//! when a user invokes the command; decoding lives in the HTTP layer.

/// The fields of a slash-command invocation.
///
/// Only `user_id` is required to be present; all other fields default to
/// empty when the platform omits them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashCommand {
    /// The command that was typed, including the leading slash.
    pub command: String,
    /// Everything the user typed after the command.
    pub text: String,
    /// Platform-assigned id of the invoking user.
    pub user_id: String,
    /// Display name of the invoking user.
    pub user_name: String,
    /// Workspace the command came from.
    pub team_id: String,
    /// Channel the command was typed in.
    pub channel_id: String,
    /// URL for delayed responses.
    pub response_url: String,
}

/// The text reply written back in the webhook response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    /// The reply text, shown verbatim to the invoking user.
    pub text: String,
}

impl CommandReply {
    /// Create a reply from any string-like text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
