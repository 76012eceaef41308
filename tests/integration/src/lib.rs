//! Integration tests for the rowcall server.
//!
//! These tests require a running rowcall server at `localhost:8080` (or the
//! address in `ROWCALL_ENDPOINT_URL`, without a trailing slash) whose
//! signing secret matches `SLACK_SIGNING_SECRET`. They are marked
//! `#[ignore]` so they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p rowcall-integration -- --ignored
//! ```

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL of the server under test.
#[must_use]
pub fn endpoint_url() -> String {
    std::env::var("ROWCALL_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:8080".to_owned())
}

/// Signing secret shared with the server under test.
#[must_use]
pub fn signing_secret() -> String {
    std::env::var("SLACK_SIGNING_SECRET").unwrap_or_else(|_| "local-secret".to_owned())
}

/// Create an HTTP client for the tests.
#[must_use]
pub fn http_client() -> reqwest::Client {
    init_tracing();
    reqwest::Client::new()
}

/// POST `body` to the webhook with freshly computed signing headers.
pub async fn post_signed(client: &reqwest::Client, body: &'static str) -> reqwest::Response {
    let timestamp = chrono::Utc::now().timestamp();
    let signature = rowcall_auth::signature(&signing_secret(), timestamp, body.as_bytes());

    client
        .post(endpoint_url())
        .header("content-type", "application/x-www-form-urlencoded")
        .header(rowcall_auth::TIMESTAMP_HEADER, timestamp.to_string())
        .header(rowcall_auth::SIGNATURE_HEADER, signature)
        .body(body)
        .send()
        .await
        .unwrap_or_else(|e| panic!("failed to POST webhook request: {e}"))
}

mod test_webhook;
