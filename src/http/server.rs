//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with all handlers
//! - Wire up middleware (tracing, inbound timeout, body limit)
//! - Bind the server to a listener and serve until shutdown

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::handlers::{health, not_found, shop_info};
use crate::upstream::ShopifyClient;

/// Maximum accepted request body size. Incoming bodies are accepted but the
/// functional route only consumes query parameters.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub shopify: ShopifyClient,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let shopify = ShopifyClient::new(&config.upstream)?;
        let request_timeout = Duration::from_secs(config.timeouts.request_secs);

        let state = AppState {
            config: Arc::new(config),
            shopify,
        };

        Ok(Self {
            router: Self::build_router(state, request_timeout),
        })
    }

    /// Build the axum router with all middleware layers.
    fn build_router(state: AppState, request_timeout: Duration) -> Router {
        // Wrong-method requests on known paths fall through to the same
        // catch-all as unknown paths.
        Router::new()
            .route("/health", get(health).fallback(not_found))
            .route("/", get(shop_info).fallback(not_found))
            .fallback(not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
