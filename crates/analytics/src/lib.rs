//! Campaign analytics — status filtering, metric aggregation, and view
//! derivation over in-memory campaign lists.

pub mod filter;
pub mod summary;
pub mod view;

pub use filter::filter_campaigns;
pub use summary::{ctr, summarize, CampaignSummary};
pub use view::{derive_view, DashboardView};
