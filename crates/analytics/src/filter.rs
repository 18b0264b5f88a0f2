//! Status filtering over the full campaign list.

use dashboard_core::{Campaign, StatusFilter};

/// Reduce the full campaign list to the subset matching the selected
/// status, preserving the original relative order.
///
/// `StatusFilter::All` is the identity transform (same order, no dedup).
/// An unrecognized status value yields an empty list; that is accepted
/// behavior, not a fault.
pub fn filter_campaigns(campaigns: &[Campaign], filter: &StatusFilter) -> Vec<Campaign> {
    campaigns
        .iter()
        .filter(|c| filter.matches(&c.status))
        .cloned()
        .collect()
}
