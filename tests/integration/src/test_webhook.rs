//! Webhook tests against a running rowcall server.

#[cfg(test)]
mod tests {
    use crate::{endpoint_url, http_client, post_signed, signing_secret};

    const COMMAND_BODY: &str = "command=%2Fbalance&user_id=U0INTEG&user_name=integ";

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_answer_health_probe() {
        let client = http_client();

        let response = client
            .get(format!("{}/healthz", endpoint_url()))
            .send()
            .await
            .expect("health request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body = response.text().await.expect("health body");
        assert!(body.starts_with("ok"));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_unsigned_post() {
        let client = http_client();

        let response = client
            .post(endpoint_url())
            .header("content-type", "application/x-www-form-urlencoded")
            .body(COMMAND_BODY)
            .send()
            .await
            .expect("unsigned request");

        assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_stale_timestamp() {
        let client = http_client();
        let timestamp = chrono::Utc::now().timestamp() - 3600;
        let signature =
            rowcall_auth::signature(&signing_secret(), timestamp, COMMAND_BODY.as_bytes());

        let response = client
            .post(endpoint_url())
            .header("content-type", "application/x-www-form-urlencoded")
            .header(rowcall_auth::TIMESTAMP_HEADER, timestamp.to_string())
            .header(rowcall_auth::SIGNATURE_HEADER, signature)
            .body(COMMAND_BODY)
            .send()
            .await
            .expect("stale request");

        assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_get_on_webhook_path() {
        let client = http_client();

        let response = client
            .get(endpoint_url())
            .send()
            .await
            .expect("GET request");

        assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_answer_signed_command() {
        let client = http_client();

        let response = post_signed(&client, COMMAND_BODY).await;

        // The reply text depends on the live spreadsheet; a verified command
        // always gets a 200 text reply.
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body = response.text().await.expect("reply body");
        assert!(!body.is_empty());
    }
}
