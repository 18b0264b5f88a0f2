//! View derivation — filter then summarize in one pass.
//!
//! The surrounding application calls [`derive_view`] whenever the full
//! list or the selected filter changes; each call produces a fresh
//! immutable snapshot with no memoization across changes.

use crate::filter::filter_campaigns;
use crate::summary::{summarize, CampaignSummary};
use dashboard_core::{Campaign, StatusFilter};
use serde::{Deserialize, Serialize};

/// The visible campaign subset plus its aggregate figures, as handed to
/// the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub campaigns: Vec<Campaign>,
    pub summary: CampaignSummary,
}

/// Derive the dashboard view for a filter selection. Pure function of its
/// two inputs; the summary always describes the filtered subset.
pub fn derive_view(campaigns: &[Campaign], filter: &StatusFilter) -> DashboardView {
    let visible = filter_campaigns(campaigns, filter);
    let summary = summarize(&visible);
    DashboardView {
        campaigns: visible,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::CampaignStatus;

    fn sample_campaigns() -> Vec<Campaign> {
        vec![
            Campaign {
                id: 1,
                name: "A".into(),
                status: CampaignStatus::Active,
                clicks: 100,
                cost: 50.5,
                impressions: 1000,
            },
            Campaign {
                id: 2,
                name: "B".into(),
                status: CampaignStatus::Paused,
                clicks: 20,
                cost: 10.0,
                impressions: 500,
            },
        ]
    }

    #[test]
    fn test_end_to_end_scenario() {
        let campaigns = sample_campaigns();

        let active = derive_view(&campaigns, &StatusFilter::parse("Active"));
        assert_eq!(active.campaigns.len(), 1);
        assert_eq!(active.campaigns[0].id, 1);

        let all = derive_view(&campaigns, &StatusFilter::All);
        assert_eq!(all.summary.count, 2);
        assert_eq!(all.summary.total_clicks, 120);
        assert_eq!(all.summary.formatted_cost(), "60.50");
        assert_eq!(all.summary.total_impressions, 1500);
        assert_eq!(all.summary.average_ctr, 8.0);
    }

    #[test]
    fn test_summary_follows_filter() {
        let campaigns = sample_campaigns();
        let paused = derive_view(&campaigns, &StatusFilter::parse("Paused"));
        assert_eq!(paused.summary.count, 1);
        assert_eq!(paused.summary.total_clicks, 20);
        assert_eq!(paused.summary.average_ctr, 4.0);
    }

    #[test]
    fn test_unmatched_filter_yields_empty_view() {
        let campaigns = sample_campaigns();
        let view = derive_view(&campaigns, &StatusFilter::parse("Completed"));
        assert!(view.campaigns.is_empty());
        assert_eq!(view.summary, summarize(&[]));
    }

    #[test]
    fn test_view_serializes() {
        let campaigns = sample_campaigns();
        let view = derive_view(&campaigns, &StatusFilter::All);
        let json = serde_json::to_string(&view).unwrap();
        let back: DashboardView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
