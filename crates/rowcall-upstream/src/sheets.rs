//! Spreadsheet grid fetching.

use async_trait::async_trait;

use rowcall_model::ValueRange;

use crate::error::UpstreamError;

/// Base URL of the spreadsheet values API.
const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Source of the tabular dataset.
///
/// The grid is fetched fresh on every call; implementations hold no
/// per-request state.
#[async_trait]
pub trait GridSource: Send + Sync {
    /// Fetch the configured range as a value grid.
    async fn fetch_values(&self) -> Result<ValueRange, UpstreamError>;
}

/// [`GridSource`] backed by the `values.get` endpoint, authenticated with an
/// API key.
///
/// Values are requested with the `UNFORMATTED_VALUE` render option so number
/// and boolean cells arrive with their native types instead of locale-
/// formatted strings.
#[derive(Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    range: String,
    api_key: String,
}

impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsClient")
            .field("base_url", &self.base_url)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("range", &self.range)
            .field("api_key", &"***")
            .finish()
    }
}

impl SheetsClient {
    /// Create a client for one spreadsheet range.
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        spreadsheet_id: impl Into<String>,
        range: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: SHEETS_BASE_URL.to_owned(),
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
            api_key: api_key.into(),
        }
    }

    /// Override the API base URL (points the client at a local fake in
    /// tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The `values.get` URL for the configured spreadsheet and range.
    fn values_url(&self) -> String {
        format!(
            "{}/{}/values/{}",
            self.base_url, self.spreadsheet_id, self.range
        )
    }
}

#[async_trait]
impl GridSource for SheetsClient {
    async fn fetch_values(&self) -> Result<ValueRange, UpstreamError> {
        let response = self
            .client
            .get(self.values_url())
            .query(&[
                ("key", self.api_key.as_str()),
                ("valueRenderOption", "UNFORMATTED_VALUE"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status {
                endpoint: "spreadsheet values API",
                status: response.status(),
            });
        }

        Ok(response.json::<ValueRange>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_values_url() {
        let client = SheetsClient::new(reqwest::Client::new(), "sheet-id", "Sheet1!A1:C30", "key");
        assert_eq!(
            client.values_url(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/Sheet1!A1:C30"
        );
    }

    #[test]
    fn test_should_override_base_url() {
        let client = SheetsClient::new(reqwest::Client::new(), "sheet-id", "A1:B2", "key")
            .with_base_url("http://127.0.0.1:9");
        assert_eq!(
            client.values_url(),
            "http://127.0.0.1:9/sheet-id/values/A1:B2"
        );
    }

    #[test]
    fn test_should_hide_api_key_in_debug_output() {
        let client = SheetsClient::new(reqwest::Client::new(), "sheet-id", "A1:B2", "secret-key");
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("sheet-id"));
    }
}
