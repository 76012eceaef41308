//! User identity resolution via the chat platform's profile API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::UpstreamError;

/// Base URL of the platform Web API.
const SLACK_BASE_URL: &str = "https://slack.com/api";

/// Resolver from a platform user id to the email on the user's profile.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve `user_id` to the profile email address.
    async fn resolve_email(&self, user_id: &str) -> Result<String, UpstreamError>;
}

/// [`IdentityResolver`] backed by `users.profile.get` with a bot token.
#[derive(Clone)]
pub struct SlackClient {
    client: reqwest::Client,
    base_url: String,
    bot_token: String,
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("base_url", &self.base_url)
            .field("bot_token", &"***")
            .finish()
    }
}

/// Envelope of every Web API response: `ok` plus either a payload or an
/// error code.
#[derive(Debug, Deserialize)]
struct ProfileResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    profile: Option<Profile>,
}

#[derive(Debug, Deserialize)]
struct Profile {
    #[serde(default)]
    email: Option<String>,
}

impl SlackClient {
    /// Create a client authenticated with a bot token.
    #[must_use]
    pub fn new(client: reqwest::Client, bot_token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: SLACK_BASE_URL.to_owned(),
            bot_token: bot_token.into(),
        }
    }

    /// Override the API base URL (points the client at a local fake in
    /// tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn profile_url(&self) -> String {
        format!("{}/users.profile.get", self.base_url)
    }
}

#[async_trait]
impl IdentityResolver for SlackClient {
    async fn resolve_email(&self, user_id: &str) -> Result<String, UpstreamError> {
        let response = self
            .client
            .get(self.profile_url())
            .bearer_auth(&self.bot_token)
            .query(&[("user", user_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status {
                endpoint: "user profile API",
                status: response.status(),
            });
        }

        let envelope = response.json::<ProfileResponse>().await?;
        if !envelope.ok {
            return Err(UpstreamError::Api(
                envelope.error.unwrap_or_else(|| "unknown error".to_owned()),
            ));
        }

        envelope
            .profile
            .and_then(|profile| profile.email)
            .filter(|email| !email.is_empty())
            .ok_or_else(|| UpstreamError::MissingEmail(user_id.to_owned()))
    }
}
