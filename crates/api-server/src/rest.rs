//! REST API handlers for the campaign dashboard endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use dashboard_analytics::{derive_view, CampaignSummary};
use dashboard_core::{Campaign, StatusFilter};
use dashboard_source::CampaignStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CampaignStore>,
    pub start_time: Instant,
}

/// Optional status selection carried on list/summary requests.
/// Absent means "All"; an unrecognized value filters to an empty list
/// rather than erroring.
#[derive(Debug, Deserialize)]
pub struct CampaignQuery {
    pub status: Option<String>,
}

impl CampaignQuery {
    fn filter(&self) -> StatusFilter {
        match &self.status {
            Some(value) => StatusFilter::parse(value),
            None => StatusFilter::All,
        }
    }
}

/// GET / — service info.
pub async fn read_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Campaign Dashboard API".to_string(),
        status: "running".to_string(),
    })
}

/// GET /campaigns — campaign list, optionally filtered by `?status=`.
pub async fn list_campaigns(
    State(state): State<AppState>,
    Query(query): Query<CampaignQuery>,
) -> Json<Vec<Campaign>> {
    metrics::counter!("api.campaigns.list").increment(1);
    let campaigns = state.store.list_campaigns();
    let view = derive_view(&campaigns, &query.filter());
    Json(view.campaigns)
}

/// GET /campaigns/summary — aggregate figures for the same optional filter.
pub async fn campaign_summary(
    State(state): State<AppState>,
    Query(query): Query<CampaignQuery>,
) -> Json<CampaignSummary> {
    metrics::counter!("api.campaigns.summary").increment(1);
    let campaigns = state.store.list_campaigns();
    let view = derive_view(&campaigns, &query.filter());
    Json(view.summary)
}

/// GET /health — Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        campaigns: state.store.len(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe. 200 once the store is populated.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.store.is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /live — Liveness probe.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub campaigns: usize,
    pub uptime_secs: u64,
}
