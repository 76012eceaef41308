//! Webhook HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use tracing::{debug, error, warn};

use crate::body::ReplyBody;
use crate::command::parse_slash_command;
use crate::dispatch::{SlashHandler, dispatch_command};
use crate::response::{empty_response, health_response, text_response};

/// Liveness probe path, served without authentication.
pub const HEALTH_PATH: &str = "/healthz";

/// Configuration for the webhook HTTP service.
#[derive(Clone, Default)]
pub struct RowcallHttpConfig {
    /// Shared secret the sender signs requests with.
    pub signing_secret: String,
    /// Skip signature verification. Local testing only; verification is on
    /// by default.
    pub skip_signature_verification: bool,
}

impl std::fmt::Debug for RowcallHttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowcallHttpConfig")
            .field("signing_secret", &"***")
            .field(
                "skip_signature_verification",
                &self.skip_signature_verification,
            )
            .finish()
    }
}

/// Hyper `Service` implementation for the slash-command webhook.
///
/// Wraps a [`SlashHandler`] implementation and drives every inbound request
/// through the verification and dispatch pipeline.
#[derive(Debug)]
pub struct RowcallService<H: SlashHandler> {
    handler: Arc<H>,
    config: Arc<RowcallHttpConfig>,
}

impl<H: SlashHandler> RowcallService<H> {
    /// Create a new `RowcallService`.
    pub fn new(handler: Arc<H>, config: RowcallHttpConfig) -> Self {
        Self {
            handler,
            config: Arc::new(config),
        }
    }
}

impl<H: SlashHandler> Clone for RowcallService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: SlashHandler> hyper::service::Service<http::Request<Incoming>> for RowcallService<H> {
    type Response = http::Response<ReplyBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let config = Arc::clone(&self.config);

        Box::pin(async move { Ok(process_request(req, handler.as_ref(), &config).await) })
    }
}

/// Collect the request body and run the webhook pipeline.
async fn process_request<H: SlashHandler>(
    req: http::Request<Incoming>,
    handler: &H,
    config: &RowcallHttpConfig,
) -> http::Response<ReplyBody> {
    let (parts, incoming) = req.into_parts();

    let body = match collect_body(incoming).await {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "failed to read request body");
            return empty_response(http::StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    handle_parts(parts, body, handler, config).await
}

/// Run a webhook request with an already-collected body through the full
/// pipeline.
///
/// Factored out of [`process_request`] so tests can drive the pipeline
/// without a hyper connection.
async fn handle_parts<H: SlashHandler>(
    parts: http::request::Parts,
    body: Bytes,
    handler: &H,
    config: &RowcallHttpConfig,
) -> http::Response<ReplyBody> {
    // 1. Liveness probe, answered before any authentication.
    if parts.method == http::Method::GET && parts.uri.path() == HEALTH_PATH {
        return health_response();
    }

    // 2. Only POST carries slash commands.
    if parts.method != http::Method::POST {
        warn!(method = %parts.method, path = %parts.uri.path(), "method not allowed");
        return empty_response(http::StatusCode::METHOD_NOT_ALLOWED);
    }

    // 3. Verify the request signature before any other work.
    if config.skip_signature_verification {
        debug!("signature verification disabled by configuration");
    } else if let Err(e) = rowcall_auth::verify(&config.signing_secret, &parts.headers, &body) {
        return if e.is_unauthorized() {
            warn!(error = %e, "rejecting unverified request");
            empty_response(http::StatusCode::UNAUTHORIZED)
        } else {
            error!(error = %e, "signature verifier unusable");
            empty_response(http::StatusCode::INTERNAL_SERVER_ERROR)
        };
    }

    // 4. Decode the form body.
    let cmd = match parse_slash_command(&body) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(error = %e, "failed to decode slash command");
            return empty_response(http::StatusCode::BAD_REQUEST);
        }
    };

    // 5. Dispatch to the command handler. Handler failures surface as a
    // bare error status; upstream detail stays in the logs.
    match dispatch_command(handler, cmd).await {
        Ok(reply) => text_response(http::StatusCode::OK, reply.text),
        Err(e) => {
            error!(error = %e, "failed to process slash command");
            empty_response(http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Collect the incoming body into a single `Bytes` buffer.
async fn collect_body(incoming: Incoming) -> Result<Bytes, hyper::Error> {
    incoming
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
}
