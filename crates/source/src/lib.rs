//! Campaign data source — the in-memory store backing the API server and
//! the HTTP client collaborator that fetches the list from it.

pub mod client;
pub mod store;

pub use client::CampaignClient;
pub use store::CampaignStore;
