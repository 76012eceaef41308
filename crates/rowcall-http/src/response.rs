//! Webhook response builders.

use crate::body::ReplyBody;

/// Content type for webhook text responses.
pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Build a plain-text response.
#[must_use]
pub fn text_response(
    status: http::StatusCode,
    text: impl Into<String>,
) -> http::Response<ReplyBody> {
    http::Response::builder()
        .status(status)
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .body(ReplyBody::from_text(text))
        .expect("valid text response")
}

/// Build a bodyless response carrying only a status code.
#[must_use]
pub fn empty_response(status: http::StatusCode) -> http::Response<ReplyBody> {
    http::Response::builder()
        .status(status)
        .body(ReplyBody::empty())
        .expect("valid empty response")
}

/// Build the liveness probe response.
#[must_use]
pub fn health_response() -> http::Response<ReplyBody> {
    text_response(http::StatusCode::OK, "ok\n")
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    #[tokio::test]
    async fn test_should_build_text_response() {
        let resp = text_response(http::StatusCode::OK, "Hello!");
        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(
            resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
            CONTENT_TYPE
        );
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "Hello!");
    }

    #[test]
    fn test_should_build_empty_response_without_content_type() {
        let resp = empty_response(http::StatusCode::UNAUTHORIZED);
        assert_eq!(resp.status(), http::StatusCode::UNAUTHORIZED);
        assert!(resp.headers().get(http::header::CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn test_should_build_health_response() {
        let resp = health_response();
        assert_eq!(resp.status(), http::StatusCode::OK);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "ok\n");
    }
}
