//! Listkeeper HTTP server.
//!
//! Run with: `cargo run --bin listkeeper`
//!
//! Configuration comes from `LISTKEEPER_*` environment variables, optionally
//! loaded from a `.env` file. Log filtering follows `RUST_LOG`.

use listkeeper::{app, load_templates, AppState, ServerConfig};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "listkeeper=info,listkeeper_web=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    let templates = load_templates()?;
    let router = app(&config, AppState::new(templates));

    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        session_ttl_minutes = config.session_ttl_minutes,
        secure_cookies = config.secure_cookies,
        "Listkeeper listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => warn!(error = %err, "Failed to listen for shutdown signal"),
    }
}
