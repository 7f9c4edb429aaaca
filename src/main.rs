//! Mathify · Adaptive Learning Backend
//!
//! - Axum HTTP API over the analysis and question-generation engine
//! - Optional TOML config for generator limits and a fixed seed
//!
//! Important env variables:
//!   PORT                : u16 (default 3000)
//!   MATHIFY_CONFIG_PATH : path to TOML config (`[generator]` table)
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use mathify_backend::routes::build_router;
use mathify_backend::state::AppState;
use mathify_backend::telemetry;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Shared, read-only after startup.
  let state = Arc::new(AppState::new());

  let app = build_router(state.clone());

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "mathify_backend", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "mathify_backend", "Server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "mathify_backend", error = %e, "Failed to listen for Ctrl-C; shutting down");
  }
  info!(target: "mathify_backend", "Shutdown signal received");
}
