//! Shop-info relay service.
//!
//! One process, one functional route: forward a shop-info lookup to the
//! Shopify admin API and answer with a summarized, redacted envelope.
//!
//! ```text
//! Client Request
//!     ─▶ http server ─▶ handler ─▶ upstream client ─▶ Shopify admin API
//! Client Response
//!     ◀─ envelope    ◀─ shape   ◀─ shop.name       ◀─ shop.json
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shop_relay::{HttpServer, RelayConfig, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shop_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("shop-relay v0.1.0 starting");

    // Load configuration once; handlers only ever see this snapshot.
    let config = RelayConfig::from_env();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        credentials_configured = config.credentials.is_configured(),
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
