//! Live server tests against a running sources service.
//!
//! These tests require a local sources API reachable at the base path
//! in .env.test (defaults to http://localhost:3000/api).
//!
//! Run with: cargo test --test live_tests -- --ignored

use std::time::Duration;

use secrecy::SecretString;
use sources_client::{
    IdentityStrategy, ListSourcesParams, SourceForm, SourcesClient, create_source_flow,
    load_source_for_edit, remove_source, update_source_flow,
};
use sources_config::resolve_api_base;

/// Load test environment variables.
fn load_test_env() -> (String, String) {
    dotenvy::from_filename("../../.env.test").ok();

    let base_path = std::env::var("SOURCES_BASE_PATH")
        .unwrap_or_else(|_| "http://localhost:3000/api".to_string());
    let account_number = std::env::var("FAKE_IDENTITY").unwrap_or_else(|_| "100010".to_string());

    (base_path, account_number)
}

/// Create a client for testing.
fn create_test_client() -> SourcesClient {
    let (base_path, account_number) = load_test_env();

    SourcesClient::builder()
        .api_base(resolve_api_base(&base_path))
        .identity(IdentityStrategy::Account { account_number })
        .skip_verify(true)
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create client")
}

#[tokio::test]
#[ignore = "requires a live sources service"]
async fn test_live_list_source_types() {
    let client = create_test_client();
    let types = client
        .list_source_types()
        .await
        .expect("Failed to list source types");

    assert!(
        !types.data.is_empty(),
        "Should have at least one source type"
    );
    assert!(
        types.data.iter().any(|t| t.name == "amazon"),
        "Should have the 'amazon' source type"
    );
}

#[tokio::test]
#[ignore = "requires a live sources service"]
async fn test_live_list_sources() {
    let client = create_test_client();
    let params = ListSourcesParams {
        limit: Some(10),
        offset: Some(0),
        ..Default::default()
    };
    let sources = client
        .list_sources(&params)
        .await
        .expect("Failed to list sources");

    // The account may have no sources yet; the request itself must succeed
    assert!(sources.data.len() <= 10, "Should honor the requested limit");
}

#[tokio::test]
#[ignore = "requires a live sources service"]
async fn test_live_create_update_and_remove_source() {
    let client = create_test_client();
    let types = client
        .list_source_types()
        .await
        .expect("Failed to list source types");

    let name = format!("live-test-{}", chrono::Utc::now().timestamp());
    let form = SourceForm {
        source_name: name.clone(),
        source_type: "amazon".to_string(),
        url: Some("https://ec2.us-east-1.amazonaws.com".to_string()),
        role: Some("aws".to_string()),
        user_name: Some("live-test".to_string()),
        password: Some(SecretString::new("live-test-secret".into())),
        authtype: Some("access_key_secret_key".to_string()),
        ..Default::default()
    };

    create_source_flow(&client, &form, &types.data)
        .await
        .expect("Failed to create source");

    let sources = client
        .list_sources(&ListSourcesParams::default())
        .await
        .expect("Failed to list sources");
    let source = sources
        .data
        .iter()
        .find(|s| s.name == name)
        .expect("Created source should appear in the listing");

    let detail = load_source_for_edit(&client, &source.id)
        .await
        .expect("Failed to load source for edit");
    assert!(
        detail.endpoint.is_some(),
        "Created source should have an endpoint"
    );

    let mut update_form = form.clone();
    update_form.user_name = Some("live-test-rotated".to_string());
    update_source_flow(&client, &detail, &update_form)
        .await
        .expect("Failed to update source");

    remove_source(&client, &source.id)
        .await
        .expect("Failed to remove source");
}

#[tokio::test]
#[ignore = "requires a live sources service"]
async fn test_live_show_missing_source() {
    let client = create_test_client();
    let result = client.show_source("999999999").await;

    assert!(result.is_err(), "Missing source should be an API error");
}
