//! Integration test for the full campaign list/filter/summary flow over
//! the REST surface.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use dashboard_analytics::CampaignSummary;
use dashboard_api::server::campaign_router;
use dashboard_core::{Campaign, CampaignStatus};
use dashboard_source::CampaignStore;
use std::sync::Arc;
use tower::ServiceExt;

fn sample_store() -> Arc<CampaignStore> {
    let store = CampaignStore::empty();
    store.insert_campaign(Campaign {
        id: 1,
        name: "A".into(),
        status: CampaignStatus::Active,
        clicks: 100,
        cost: 50.5,
        impressions: 1000,
    });
    store.insert_campaign(Campaign {
        id: 2,
        name: "B".into(),
        status: CampaignStatus::Paused,
        clicks: 20,
        cost: 10.0,
        impressions: 500,
    });
    Arc::new(store)
}

async fn get_json<T: serde::de::DeserializeOwned>(
    router: axum::Router,
    uri: &str,
) -> (StatusCode, T) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_all_campaigns() {
    let router = campaign_router(sample_store());
    let (status, campaigns): (_, Vec<Campaign>) = get_json(router, "/campaigns").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[0].id, 1);
}

#[tokio::test]
async fn test_list_filtered_campaigns() {
    let router = campaign_router(sample_store());
    let (status, campaigns): (_, Vec<Campaign>) =
        get_json(router, "/campaigns?status=Active").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(campaigns.len(), 1);
    assert_eq!(campaigns[0].name, "A");
}

#[tokio::test]
async fn test_unknown_status_yields_empty_list() {
    let router = campaign_router(sample_store());
    let (status, campaigns): (_, Vec<Campaign>) =
        get_json(router, "/campaigns?status=Archived").await;
    assert_eq!(status, StatusCode::OK);
    assert!(campaigns.is_empty());
}

#[tokio::test]
async fn test_summary_endpoint() {
    let router = campaign_router(sample_store());
    let (status, summary): (_, CampaignSummary) =
        get_json(router, "/campaigns/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_clicks, 120);
    assert_eq!(summary.total_impressions, 1500);
    assert_eq!(summary.formatted_cost(), "60.50");
    assert_eq!(summary.average_ctr, 8.0);
}

#[tokio::test]
async fn test_filtered_summary_endpoint() {
    let router = campaign_router(sample_store());
    let (status, summary): (_, CampaignSummary) =
        get_json(router, "/campaigns/summary?status=Paused").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary.count, 1);
    assert_eq!(summary.total_clicks, 20);
    assert_eq!(summary.average_ctr, 4.0);
}

#[tokio::test]
async fn test_probes() {
    let router = campaign_router(sample_store());
    let response = router
        .clone()
        .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ready_requires_campaigns() {
    let router = campaign_router(Arc::new(CampaignStore::empty()));
    let response = router
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
