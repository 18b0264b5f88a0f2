//! Dashboard domain types — campaigns, statuses, filter state.

use serde::{Deserialize, Serialize};

/// A single marketing-campaign record with performance counters and spend.
///
/// Received as-is from the data source; never mutated after load. The
/// `clicks <= impressions` relationship is expected but not enforced, so a
/// computed CTR may exceed 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub status: CampaignStatus,
    pub clicks: u64,
    /// Spend in an opaque display currency, shown with two decimals.
    pub cost: f64,
    pub impressions: u64,
}

/// Campaign status as reported by the data source.
///
/// The wire format is a plain string with no enum enforcement upstream;
/// anything other than `Active` / `Paused` round-trips through `Unknown`
/// and is treated as "not Active" for filtering purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignStatus {
    Active,
    Paused,
    Unknown(String),
}

impl CampaignStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Unknown(s) => s.as_str(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CampaignStatus::Active)
    }
}

impl From<String> for CampaignStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Active" => CampaignStatus::Active,
            "Paused" => CampaignStatus::Paused,
            _ => CampaignStatus::Unknown(s),
        }
    }
}

impl From<&str> for CampaignStatus {
    fn from(s: &str) -> Self {
        CampaignStatus::from(s.to_string())
    }
}

impl From<CampaignStatus> for String {
    fn from(status: CampaignStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The currently selected status value controlling which campaigns are
/// visible. `Only` holds the literal status string to match, so the filter
/// extends to any status value present in the data; an unrecognized value
/// legitimately matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// Parse a selection literal. `"All"` selects everything; any other
    /// value filters by exact status string.
    pub fn parse(value: &str) -> Self {
        if value == "All" {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, status: &CampaignStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => status.as_str() == s,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(s) => f.write_str(s),
        }
    }
}
