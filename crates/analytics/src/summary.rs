//! Aggregate metrics over the visible campaign list.

use dashboard_core::Campaign;
use serde::{Deserialize, Serialize};

/// Summary figures for whatever campaign list is currently in view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub count: usize,
    pub total_clicks: u64,
    pub total_cost: f64,
    pub total_impressions: u64,
    /// Aggregate click-through-rate as a percentage, rounded to two
    /// decimals; 0.00 when there are no impressions.
    pub average_ctr: f64,
}

impl CampaignSummary {
    /// Total cost formatted to exactly two decimal places for display.
    /// The currency unit is opaque and not modeled.
    pub fn formatted_cost(&self) -> String {
        format!("{:.2}", self.total_cost)
    }
}

/// Compute summary figures over a campaign list. Sums are zero for the
/// empty list; the average CTR never divides by zero.
pub fn summarize(campaigns: &[Campaign]) -> CampaignSummary {
    let total_clicks: u64 = campaigns.iter().map(|c| c.clicks).sum();
    let total_cost: f64 = campaigns.iter().map(|c| c.cost).sum();
    let total_impressions: u64 = campaigns.iter().map(|c| c.impressions).sum();

    CampaignSummary {
        count: campaigns.len(),
        total_clicks,
        total_cost,
        total_impressions,
        average_ctr: ctr(total_clicks, total_impressions),
    }
}

/// Click-through-rate as a percentage, rounded to two decimals.
///
/// Defined as 0.00 when `impressions` is zero, both per row and in the
/// aggregate. Clicks are not clamped to impressions, so the result may
/// exceed 100.
pub fn ctr(clicks: u64, impressions: u64) -> f64 {
    if impressions == 0 {
        return 0.0;
    }
    round2(clicks as f64 / impressions as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
