//! Rowcall server binary.
//!
//! Serves the slash-command webhook: verifies request signatures, resolves
//! the caller to a search value, fetches the configured spreadsheet range,
//! and replies with the looked-up cell.
//!
//! # Usage
//!
//! ```text
//! ROWCALL_LISTEN_ADDR=0.0.0.0:8080 rowcall-server
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ROWCALL_LISTEN_ADDR` | `0.0.0.0:8080` | Bind address |
//! | `SLACK_SIGNING_SECRET` | *(required)* | Webhook signing secret |
//! | `SLACK_BOT_TOKEN` | *(required for email search)* | Profile API bot token |
//! | `SLACK_CUSTOM_SUCCESS_MSG` | `Here is your data:` | Success reply line |
//! | `GOOGLE_SPREADSHEET_ID` | *(required)* | Spreadsheet document id |
//! | `GOOGLE_SPREADSHEET_RANGE` | *(required)* | A1-notation range to fetch |
//! | `GOOGLE_API_KEY` | *(required)* | Spreadsheet API key |
//! | `GOOGLE_SEARCHING_VALUE_FROM` | *(required)* | Search column name |
//! | `GOOGLE_TAKING_VALUE_FROM` | *(required)* | Take column name |
//! | `GOOGLE_HEADER_ROW_INDEX` | `0` | Zero-based header row index |
//! | `GOOGLE_CASE_SENSITIVE` | `false` | Case-sensitive value matching |
//! | `GOOGLE_USE_EMAIL_AS_SEARCHING_VALUE` | `true` | Search by profile email |
//! | `ROWCALL_SKIP_SIGNATURE_VERIFICATION` | `false` | Disable verification (local only) |
//! | `ROWCALL_UPSTREAM_TIMEOUT_SECS` | `10` | Outbound HTTP timeout |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rowcall_core::config::RowcallConfig;
use rowcall_core::handler::RowcallHandler;
use rowcall_http::service::{HEALTH_PATH, RowcallHttpConfig, RowcallService};
use rowcall_upstream::{SheetsClient, SlackClient};

/// Server version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Run the accept loop, serving connections until a shutdown signal is received.
async fn serve(listener: TcpListener, service: RowcallService<RowcallHandler>) -> Result<()> {
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    // Wait for in-flight requests to complete.
    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}

/// Probe the health endpoint over a raw TCP connection.
///
/// Backs the `--health-check` flag used as a container HEALTHCHECK entry
/// point. Exits through the caller with 0 on a 200 response, 1 otherwise.
async fn run_health_check(addr: &str) -> Result<()> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    let stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("cannot connect to {addr}"))?;

    let (mut reader, mut writer) = stream.into_split();

    let request =
        format!("GET {HEALTH_PATH} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    writer.write_all(request.as_bytes()).await?;
    writer.shutdown().await?;

    let mut response = String::new();
    reader.read_to_string(&mut response).await?;

    if response.contains("200 OK") {
        Ok(())
    } else {
        anyhow::bail!("unhealthy response from {addr}")
    }
}

/// Rewrite a wildcard bind address into a loopback address for probing.
fn loopback_addr(listen_addr: &str) -> String {
    listen_addr.replace("0.0.0.0", "127.0.0.1")
}

/// Read the log level from the environment.
fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = RowcallConfig::from_env();

    // Handle --health-check flag for Docker HEALTHCHECK.
    if std::env::args().any(|a| a == "--health-check") {
        let healthy = run_health_check(&loopback_addr(&config.listen_addr))
            .await
            .is_ok();
        std::process::exit(i32::from(!healthy));
    }

    init_tracing(&log_level())?;

    config.validate()?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()
        .context("failed to build outbound HTTP client")?;

    let grid_source = Arc::new(SheetsClient::new(
        client.clone(),
        config.spreadsheet_id.clone(),
        config.range.clone(),
        config.api_key.clone(),
    ));
    let identity = Arc::new(SlackClient::new(client, config.bot_token.clone()));

    let http_config = RowcallHttpConfig {
        signing_secret: config.signing_secret.clone(),
        skip_signature_verification: config.skip_signature_verification,
    };

    info!(
        search_by_email = config.search_by_email,
        case_sensitive = config.case_sensitive,
        skip_signature_verification = config.skip_signature_verification,
        "initializing rowcall service",
    );

    let handler = RowcallHandler::new(grid_source, identity, config.clone());
    let service = RowcallService::new(Arc::new(handler), http_config);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.listen_addr))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(%addr, version = VERSION, "starting rowcall server");

    serve(listener, service).await
}
