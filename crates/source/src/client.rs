//! HTTP client for the campaign backend.
//!
//! One-shot fetch of the full campaign list, resolved once at load time.
//! Fetch failures surface to the caller as [`DashboardError::Fetch`]; the
//! core never sees a partial or malformed list.

use dashboard_core::config::SourceConfig;
use dashboard_core::{Campaign, DashboardError, DashboardResult};
use tracing::{debug, info};

/// Client for the campaign list endpoint.
pub struct CampaignClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CampaignClient {
    /// Build a client against an explicitly injected endpoint URL.
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch all campaigns from `GET {endpoint}/campaigns`.
    pub async fn fetch_campaigns(&self) -> DashboardResult<Vec<Campaign>> {
        let url = format!("{}/campaigns", self.endpoint);
        debug!(url = %url, "Fetching campaign list");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Fetch(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Fetch(format!(
                "{url} returned HTTP {status}"
            )));
        }

        let campaigns: Vec<Campaign> = response
            .json()
            .await
            .map_err(|e| DashboardError::Fetch(format!("invalid campaign payload: {e}")))?;

        info!(count = campaigns.len(), "Campaign list fetched");
        Ok(campaigns)
    }
}
