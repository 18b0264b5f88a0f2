//! API server — mounts the campaign endpoints and serves HTTP.

use crate::rest::{self, AppState};
use axum::routing::get;
use axum::Router;
use dashboard_core::config::AppConfig;
use dashboard_source::CampaignStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the dashboard router over a campaign store.
pub fn campaign_router(store: Arc<CampaignStore>) -> Router {
    let state = AppState {
        store,
        start_time: Instant::now(),
    };

    Router::new()
        .route("/", get(rest::read_root))
        .route("/campaigns", get(rest::list_campaigns))
        .route("/campaigns/summary", get(rest::campaign_summary))
        // Operational endpoints
        .route("/health", get(rest::health_check))
        .route("/ready", get(rest::readiness))
        .route("/live", get(rest::liveness))
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP server for the campaign dashboard API.
pub struct ApiServer {
    config: AppConfig,
    store: Arc<CampaignStore>,
}

impl ApiServer {
    pub fn new(config: AppConfig, store: Arc<CampaignStore>) -> Self {
        Self { config, store }
    }

    /// Start the HTTP server (blocks until shutdown).
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let app = campaign_router(self.store.clone());

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
