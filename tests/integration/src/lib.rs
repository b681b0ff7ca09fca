//! Integration tests for the LadderStack server.
//!
//! Each test spins up a real server on an ephemeral port (full hyper stack,
//! fresh in-memory store) and drives it with `reqwest`, so the wire shapes
//! tested here are exactly what the frontend sees.

use std::sync::{Arc, Once};

use anyhow::Result;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;

use ladderstack_core::config::LadderConfig;
use ladderstack_core::handler::LadderStackGamesHandler;
use ladderstack_core::provider::LadderStackGames;
use ladderstack_http::service::{LadderHttpConfig, LadderHttpService};

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

/// Start a server with a fresh store on an ephemeral port.
///
/// Returns the base URL. The accept loop lives on a background task and
/// dies with the test runtime.
pub async fn spawn_server() -> Result<String> {
    init_tracing();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let provider = LadderStackGames::new(LadderConfig::default());
    let handler = LadderStackGamesHandler::new(Arc::new(provider));
    let service = LadderHttpService::new(Arc::new(handler), LadderHttpConfig::default());

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let svc = service.clone();
            tokio::spawn(async move {
                let http = HttpConnBuilder::new(TokioExecutor::new());
                if let Err(e) = http.serve_connection(TokioIo::new(stream), svc).await {
                    tracing::debug!(error = %e, "test connection closed");
                }
            });
        }
    });

    Ok(format!("http://{addr}"))
}

/// Create a game via the HTTP API and return its join code.
pub async fn create_game(
    client: &reqwest::Client,
    base: &str,
    max_participants: u32,
    result_items: serde_json::Value,
) -> Result<String> {
    let resp = client
        .post(format!("{base}/ladders"))
        .json(&serde_json::json!({
            "maxParticipants": max_participants,
            "resultItems": result_items,
        }))
        .send()
        .await?;
    anyhow::ensure!(resp.status() == 200, "create failed: {}", resp.status());
    let body: serde_json::Value = resp.json().await?;
    Ok(body["id"].as_str().unwrap_or_default().to_owned())
}

mod test_create;
mod test_fetch;
mod test_routes;
