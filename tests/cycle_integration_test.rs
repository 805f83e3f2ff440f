//! End-to-end fetch cycle tests against a mock API server

use hemodash::adapters::api::{HttpDataSource, Resource};
use hemodash::config::{ApiConfig, RetryConfig};
use hemodash::core::cycle::Orchestrator;
use hemodash::core::viewmodel::build_view_model;
use mockito::{Matcher, Server, ServerGuard};
use std::sync::Arc;

fn api_config(server_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: server_url.to_string(),
        timeout_ms: 2_000,
        ..Default::default()
    }
}

// Short delay keeps retry tests fast without touching the policy shape
fn retry_policy() -> RetryConfig {
    RetryConfig {
        max_retries: 2,
        delay_ms: 10,
    }
}

fn orchestrator_for(server_url: &str) -> Orchestrator {
    let source = Arc::new(HttpDataSource::new(&api_config(server_url)).unwrap());
    Orchestrator::new(source, retry_policy(), false)
}

async fn mock_all_resources(server: &mut ServerGuard) {
    server
        .mock("GET", "/Dashboard/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"stats": {
                "totalDonors": 120,
                "totalBloodRequests": 30,
                "totalBloodCenters": 4,
                "requestsByBloodGroup": {"7": 20, "3": 10},
                "requestsByWilaya": {"Alger": 18, "Oran": 12},
                "centersByWilaya": {"Alger": 3, "Oran": 1},
                "globalBloodStock": {
                    "7": {"totalAvailable": 40, "totalMinStock": 100, "totalMaxStock": 300},
                    "3": {"totalAvailable": 150, "totalMinStock": 100, "totalMaxStock": 300}
                }
            }}"#,
        )
        .create_async()
        .await;
    server
        .mock("GET", "/BloodDonationRequests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"bloodDonationRequests": [
                {"id": "r1", "priority": 3, "bloodGroup": 7,
                 "bloodTansfusionCenter": {"id": "c1", "name": "CHU Mustapha"}}
            ]}"#,
        )
        .create_async()
        .await;
    server
        .mock("GET", "/BTC")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"bloodTansfusionCenters": [{"id": "c1", "name": "CHU Mustapha"}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/Wilayas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"wilayas": [{"id": 16, "name": "Alger"}, {"id": 31, "name": "Oran"}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/users")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"users": [{"id": "d1", "donorName": "Karim", "donorBloodGroup": 7}]}"#)
        .create_async()
        .await;
}

#[tokio::test]
async fn test_full_cycle_builds_live_view_model() {
    let mut server = Server::new_async().await;
    mock_all_resources(&mut server).await;

    let orchestrator = orchestrator_for(&server.url());
    let resources = Resource::full_set(&api_config(&server.url()));
    let outcome = orchestrator.run_cycle(&resources).await;

    assert!(outcome.connectivity.is_online);
    assert!(!outcome.connectivity.using_fallback);
    assert!(outcome.connectivity.banner().is_none());

    let view = build_view_model(&outcome.snapshot, outcome.connectivity);
    assert_eq!(view.total_donors, 120);
    assert_eq!(view.stock_levels.len(), 2);
    // O+ is 40 of 100: critical stock plus one critical request
    assert_eq!(view.critical_stock_count, 1);
    assert!(view.alerts.iter().any(|a| a.id == "stock-O+"));
    assert!(view.alerts.iter().any(|a| a.id == "req-r1"));
    assert_eq!(view.donors_by_blood_type[0].label, "O+");
}

#[tokio::test]
async fn test_missing_envelope_key_yields_empty_collection() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/Wilayas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let orchestrator = orchestrator_for(&server.url());
    let outcome = orchestrator.run_cycle(&[Resource::Wilayas]).await;

    assert!(outcome.connectivity.is_online);
    assert!(outcome.snapshot.wilayas.is_empty());
}

#[tokio::test]
async fn test_persistent_failure_serves_demo_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/Wilayas")
        .with_status(503)
        .expect(3)
        .create_async()
        .await;

    let orchestrator = orchestrator_for(&server.url());
    let outcome = orchestrator.run_cycle(&[Resource::Wilayas]).await;

    mock.assert_async().await;
    assert!(!outcome.connectivity.is_online);
    assert!(outcome.connectivity.using_fallback);
    let banner = outcome.connectivity.banner().unwrap();
    assert!(banner.starts_with("API Error:"));

    // The fallback snapshot still renders a complete view
    let view = build_view_model(&outcome.snapshot, outcome.connectivity);
    assert_eq!(view.total_donors, 4068);
    assert_eq!(view.stock_levels.len(), 8);
}

#[tokio::test]
async fn test_one_bad_resource_fails_whole_batch() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/Wilayas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"wilayas": []}"#)
        .expect(3)
        .create_async()
        .await;
    server
        .mock("GET", "/Dashboard/stats")
        .with_status(500)
        .expect(3)
        .create_async()
        .await;

    let orchestrator = orchestrator_for(&server.url());
    let outcome = orchestrator
        .run_cycle(&[Resource::Stats, Resource::Wilayas])
        .await;

    // Healthy wilayas payload does not save the batch
    assert!(outcome.connectivity.using_fallback);
}
