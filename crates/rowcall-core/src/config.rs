//! Service configuration loaded from environment variables.

use std::env;

use crate::error::RowcallError;

/// Rowcall service configuration.
///
/// All values are read from environment variables via
/// [`RowcallConfig::from_env`], falling back to defaults; required fields
/// default to empty strings and are rejected by [`RowcallConfig::validate`]
/// before the server starts.
#[derive(Clone)]
pub struct RowcallConfig {
    /// Socket address the server binds (e.g. `"0.0.0.0:8080"`).
    pub listen_addr: String,

    /// Shared secret inbound webhook requests are signed with.
    pub signing_secret: String,

    /// Bearer token for the user-profile API. Needed only when
    /// `search_by_email` is set.
    pub bot_token: String,

    /// Line inserted between the greeting and the value in success replies.
    pub success_message: String,

    /// Spreadsheet document id.
    pub spreadsheet_id: String,

    /// A1-notation range to fetch.
    pub range: String,

    /// API key for the spreadsheet values API.
    pub api_key: String,

    /// Header name of the column search values are matched against.
    pub searching_value_from: String,

    /// Header name of the column reply values are taken from.
    pub taking_value_from: String,

    /// Zero-based index of the header row within the fetched grid.
    pub header_row_index: usize,

    /// Compare search values case-sensitively.
    pub case_sensitive: bool,

    /// Resolve the caller's email address as the search value. When unset,
    /// the command text is used verbatim.
    pub search_by_email: bool,

    /// Skip signature verification on inbound requests. Local testing only.
    pub skip_signature_verification: bool,

    /// Timeout for outbound HTTP calls, in seconds.
    pub upstream_timeout_secs: u64,
}

impl std::fmt::Debug for RowcallConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowcallConfig")
            .field("listen_addr", &self.listen_addr)
            .field("signing_secret", &"***")
            .field("bot_token", &"***")
            .field("success_message", &self.success_message)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("range", &self.range)
            .field("api_key", &"***")
            .field("searching_value_from", &self.searching_value_from)
            .field("taking_value_from", &self.taking_value_from)
            .field("header_row_index", &self.header_row_index)
            .field("case_sensitive", &self.case_sensitive)
            .field("search_by_email", &self.search_by_email)
            .field(
                "skip_signature_verification",
                &self.skip_signature_verification,
            )
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .finish()
    }
}

impl Default for RowcallConfig {
    fn default() -> Self {
        Self {
            listen_addr: String::from("0.0.0.0:8080"),
            signing_secret: String::new(),
            bot_token: String::new(),
            success_message: String::from("Here is your data:"),
            spreadsheet_id: String::new(),
            range: String::new(),
            api_key: String::new(),
            searching_value_from: String::new(),
            taking_value_from: String::new(),
            header_row_index: 0,
            case_sensitive: false,
            search_by_email: true,
            skip_signature_verification: false,
            upstream_timeout_secs: 10,
        }
    }
}

impl RowcallConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `ROWCALL_LISTEN_ADDR` | `0.0.0.0:8080` |
    /// | `SLACK_SIGNING_SECRET` | (empty, required) |
    /// | `SLACK_BOT_TOKEN` | (empty, required for email search) |
    /// | `SLACK_CUSTOM_SUCCESS_MSG` | `Here is your data:` |
    /// | `GOOGLE_SPREADSHEET_ID` | (empty, required) |
    /// | `GOOGLE_SPREADSHEET_RANGE` | (empty, required) |
    /// | `GOOGLE_API_KEY` | (empty, required) |
    /// | `GOOGLE_SEARCHING_VALUE_FROM` | (empty, required) |
    /// | `GOOGLE_TAKING_VALUE_FROM` | (empty, required) |
    /// | `GOOGLE_HEADER_ROW_INDEX` | `0` |
    /// | `GOOGLE_CASE_SENSITIVE` | `false` |
    /// | `GOOGLE_USE_EMAIL_AS_SEARCHING_VALUE` | `true` |
    /// | `ROWCALL_SKIP_SIGNATURE_VERIFICATION` | `false` |
    /// | `ROWCALL_UPSTREAM_TIMEOUT_SECS` | `10` |
    ///
    /// Missing required values surface later through
    /// [`RowcallConfig::validate`], not here.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = env::var("ROWCALL_LISTEN_ADDR") {
            config.listen_addr = v;
        }
        if let Ok(v) = env::var("SLACK_SIGNING_SECRET") {
            config.signing_secret = v;
        }
        if let Ok(v) = env::var("SLACK_BOT_TOKEN") {
            config.bot_token = v;
        }
        if let Ok(v) = env::var("SLACK_CUSTOM_SUCCESS_MSG") {
            config.success_message = v;
        }
        if let Ok(v) = env::var("GOOGLE_SPREADSHEET_ID") {
            config.spreadsheet_id = v;
        }
        if let Ok(v) = env::var("GOOGLE_SPREADSHEET_RANGE") {
            config.range = v;
        }
        if let Ok(v) = env::var("GOOGLE_API_KEY") {
            config.api_key = v;
        }
        if let Ok(v) = env::var("GOOGLE_SEARCHING_VALUE_FROM") {
            config.searching_value_from = v;
        }
        if let Ok(v) = env::var("GOOGLE_TAKING_VALUE_FROM") {
            config.taking_value_from = v;
        }
        if let Ok(v) = env::var("GOOGLE_HEADER_ROW_INDEX") {
            if let Ok(n) = v.parse::<usize>() {
                config.header_row_index = n;
            }
        }
        if let Ok(v) = env::var("GOOGLE_CASE_SENSITIVE") {
            config.case_sensitive = parse_bool(&v);
        }
        if let Ok(v) = env::var("GOOGLE_USE_EMAIL_AS_SEARCHING_VALUE") {
            config.search_by_email = parse_bool(&v);
        }
        if let Ok(v) = env::var("ROWCALL_SKIP_SIGNATURE_VERIFICATION") {
            config.skip_signature_verification = parse_bool(&v);
        }
        if let Ok(v) = env::var("ROWCALL_UPSTREAM_TIMEOUT_SECS") {
            if let Ok(n) = v.parse::<u64>() {
                config.upstream_timeout_secs = n;
            }
        }

        config
    }

    /// Check that every required field is present.
    ///
    /// The signing secret is exempt while signature verification is skipped,
    /// and the bot token while email search is off.
    ///
    /// # Errors
    ///
    /// Returns [`RowcallError::Config`] naming the first missing variable.
    pub fn validate(&self) -> Result<(), RowcallError> {
        let mut required = vec![
            ("GOOGLE_SPREADSHEET_ID", &self.spreadsheet_id),
            ("GOOGLE_SPREADSHEET_RANGE", &self.range),
            ("GOOGLE_API_KEY", &self.api_key),
            ("GOOGLE_SEARCHING_VALUE_FROM", &self.searching_value_from),
            ("GOOGLE_TAKING_VALUE_FROM", &self.taking_value_from),
        ];
        if !self.skip_signature_verification {
            required.push(("SLACK_SIGNING_SECRET", &self.signing_secret));
        }
        if self.search_by_email {
            required.push(("SLACK_BOT_TOKEN", &self.bot_token));
        }

        for (name, value) in required {
            if value.is_empty() {
                return Err(RowcallError::Config(format!("{name} must be set")));
            }
        }
        Ok(())
    }
}

/// Parse a string as a boolean, accepting `1`, `true`, `yes`, and `on`
/// (case-insensitive).
fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
