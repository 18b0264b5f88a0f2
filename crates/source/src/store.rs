//! In-memory campaign store backed by DashMap.
//!
//! Production: replace with PostgreSQL (sqlx) or similar ACID store.
//! This provides the same API surface for development and testing.

use dashboard_core::{Campaign, CampaignStatus};
use dashmap::DashMap;
use tracing::info;

/// Thread-safe in-memory store for campaign records.
pub struct CampaignStore {
    campaigns: DashMap<i64, Campaign>,
}

impl CampaignStore {
    pub fn new() -> Self {
        info!("Campaign store initialized (in-memory, development mode)");
        let store = Self {
            campaigns: DashMap::new(),
        };
        store.seed_demo_data();
        store
    }

    /// Empty store with no demo data, for tests and custom setups.
    pub fn empty() -> Self {
        Self {
            campaigns: DashMap::new(),
        }
    }

    /// All campaigns ordered by id. Each call returns a fresh snapshot;
    /// records are never mutated in place after load.
    pub fn list_campaigns(&self) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> =
            self.campaigns.iter().map(|r| r.value().clone()).collect();
        campaigns.sort_by_key(|c| c.id);
        campaigns
    }

    pub fn get_campaign(&self, id: i64) -> Option<Campaign> {
        self.campaigns.get(&id).map(|r| r.value().clone())
    }

    pub fn insert_campaign(&self, campaign: Campaign) {
        self.campaigns.insert(campaign.id, campaign);
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    // ─── Demo Data ─────────────────────────────────────────────────────────

    fn seed_demo_data(&self) {
        let campaigns = [
            ("Holiday Season Push", CampaignStatus::Active, 37_500, 18_750.0, 1_250_000),
            ("Back to School", CampaignStatus::Active, 26_700, 12_450.0, 890_000),
            ("Summer Clearance", CampaignStatus::Paused, 63_000, 14_800.0, 2_100_000),
            ("New User Acquisition", CampaignStatus::Active, 85_000, 42_500.0, 3_400_000),
            ("VIP Loyalty Rewards", CampaignStatus::Active, 22_500, 6_750.0, 450_000),
            ("Flash Sale Weekend", CampaignStatus::Paused, 12_800, 4_200.0, 320_000),
            ("Brand Awareness Q1", CampaignStatus::Unknown("Draft".into()), 0, 0.0, 0),
        ];

        for (i, (name, status, clicks, cost, impressions)) in campaigns.into_iter().enumerate() {
            let id = i as i64 + 1;
            self.campaigns.insert(
                id,
                Campaign {
                    id,
                    name: name.to_string(),
                    status,
                    clicks,
                    cost,
                    impressions,
                },
            );
        }
    }
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::new()
    }
}
