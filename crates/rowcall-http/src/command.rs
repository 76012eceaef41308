//! Slash-command form decoding.

use rowcall_model::SlashCommand;

/// Error decoding the webhook form body.
#[derive(Debug, thiserror::Error)]
pub enum CommandParseError {
    /// The form carries no usable `user_id` field.
    #[error("missing required field: user_id")]
    MissingUserId,
}

/// Decode an `application/x-www-form-urlencoded` body into a
/// [`SlashCommand`].
///
/// Unknown fields are ignored. `user_id` must be present and non-empty;
/// every other field defaults to empty.
pub fn parse_slash_command(body: &[u8]) -> Result<SlashCommand, CommandParseError> {
    let mut cmd = SlashCommand::default();

    for (key, value) in form_urlencoded::parse(body) {
        match key.as_ref() {
            "command" => cmd.command = value.into_owned(),
            "text" => cmd.text = value.into_owned(),
            "user_id" => cmd.user_id = value.into_owned(),
            "user_name" => cmd.user_name = value.into_owned(),
            "team_id" => cmd.team_id = value.into_owned(),
            "channel_id" => cmd.channel_id = value.into_owned(),
            "response_url" => cmd.response_url = value.into_owned(),
            _ => {}
        }
    }

    if cmd.user_id.is_empty() {
        return Err(CommandParseError::MissingUserId);
    }

    Ok(cmd)
}
