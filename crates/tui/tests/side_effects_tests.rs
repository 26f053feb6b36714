//! Source side effect handler tests.
//!
//! These tests drive `handle_side_effects` against a wiremock server and
//! assert on the action sequences the spawned tasks send back.

mod common;

use common::*;
use secrecy::SecretString;
use sources_client::{SourceForm, SourceType};
use sources_tui::ToastLevel;
use wiremock::matchers::{method, path};

fn test_source_types() -> Vec<SourceType> {
    vec![SourceType {
        id: "3".to_string(),
        name: "amazon".to_string(),
        product_name: Some("Amazon Web Services".to_string()),
        vendor: Some("Amazon".to_string()),
    }]
}

fn test_form() -> Box<SourceForm> {
    Box::new(SourceForm {
        source_name: "AWS prod".to_string(),
        source_type: "amazon".to_string(),
        url: Some("https://ec2.amazonaws.com/".to_string()),
        user_name: Some("ops".to_string()),
        password: Some(SecretString::new("hunter2".to_string().into())),
        authtype: Some("access_key_secret_key".to_string()),
        ..SourceForm::default()
    })
}

#[tokio::test]
async fn test_load_sources_success() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/sources"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("sources/list_sources.json")),
        )
        .mount(&harness.mock_server)
        .await;

    let actions = harness.handle_and_collect(Action::LoadSources, 2).await;

    assert!(
        actions.iter().any(|a| matches!(a, Action::Loading(true))),
        "Should send Loading(true)"
    );
    assert!(
        actions
            .iter()
            .any(|a| matches!(a, Action::SourcesLoaded(Ok(sources)) if sources.len() == 2)),
        "Should send SourcesLoaded(Ok) with both sources"
    );
}

#[tokio::test]
async fn test_load_sources_failure_notifies() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/sources"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&harness.mock_server)
        .await;

    let actions = harness.handle_and_collect(Action::LoadSources, 2).await;

    assert!(
        actions
            .iter()
            .any(|a| matches!(a, Action::Notify(ToastLevel::Error, _))),
        "Should send an error toast"
    );
    assert!(
        actions
            .iter()
            .any(|a| matches!(a, Action::SourcesLoaded(Err(_)))),
        "Should send SourcesLoaded(Err)"
    );
}

#[tokio::test]
async fn test_load_source_types_does_not_toggle_loading() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/source_types"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("source_types/list_source_types.json")),
        )
        .mount(&harness.mock_server)
        .await;

    let actions = harness.handle_and_collect(Action::LoadSourceTypes, 2).await;

    assert!(
        actions
            .iter()
            .any(|a| matches!(a, Action::SourceTypesLoaded(Ok(types)) if types.len() == 3)),
        "Should send SourceTypesLoaded(Ok)"
    );
    assert!(
        !actions.iter().any(|a| matches!(a, Action::Loading(_))),
        "The catalog load must not drive the spinner"
    );
}

#[tokio::test]
async fn test_load_source_for_edit_assembles_the_detail() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/sources/750"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("sources/show_source.json")),
        )
        .mount(&harness.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sources/750/endpoints"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("endpoints/list_source_endpoints.json")),
        )
        .mount(&harness.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/endpoints/871/authentications"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("authentications/list_endpoint_authentications.json")),
        )
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::LoadSourceForEdit {
                source_id: "750".to_string(),
            },
            2,
        )
        .await;

    assert!(
        actions.iter().any(|a| matches!(a, Action::Loading(true))),
        "Should send Loading(true)"
    );
    let loaded = actions.iter().find_map(|a| match a {
        Action::SourceForEditLoaded(Ok(detail)) => Some(detail),
        _ => None,
    });
    let detail = loaded.expect("Should send SourceForEditLoaded(Ok)");
    assert_eq!(detail.source.id, "750");
    assert_eq!(detail.endpoint.as_ref().map(|e| e.id.as_str()), Some("871"));
    assert_eq!(
        detail.authentication.as_ref().map(|a| a.id.as_str()),
        Some("944")
    );
}

#[tokio::test]
async fn test_submit_create_success_notifies_and_reloads() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/sources"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("sources/create_source.json")),
        )
        .mount(&harness.mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/endpoints"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(load_fixture("endpoints/create_endpoint.json")),
        )
        .mount(&harness.mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/authentications"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(load_fixture("authentications/create_authentication.json")),
        )
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::SubmitSourceCreate {
                form: test_form(),
                source_types: test_source_types(),
            },
            2,
        )
        .await;

    assert!(
        actions.iter().any(|a| matches!(
            a,
            Action::Notify(ToastLevel::Success, message) if message.contains("AWS prod")
        )),
        "Should send a success toast naming the source"
    );
    assert!(
        actions.iter().any(|a| matches!(a, Action::LoadSources)),
        "Should request a list reload"
    );
}

#[tokio::test]
async fn test_submit_create_failure_still_reloads() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/sources"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::SubmitSourceCreate {
                form: test_form(),
                source_types: test_source_types(),
            },
            2,
        )
        .await;

    assert!(
        actions.iter().any(|a| matches!(
            a,
            Action::Notify(ToastLevel::Error, message) if message == "Source creation failure."
        )),
        "The toast should carry the failed step's message"
    );
    assert!(
        actions.iter().any(|a| matches!(a, Action::LoadSources)),
        "A failed chain still reloads, partial records included"
    );
}

#[tokio::test]
async fn test_submit_update_success_notifies_and_reloads() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("PATCH"))
        .and(path("/sources/750"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&harness.mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/endpoints/871"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&harness.mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/authentications/944"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&harness.mock_server)
        .await;

    let detail = sources_client::SourceDetail {
        source: serde_json::from_value(load_fixture("sources/show_source.json"))
            .expect("source fixture"),
        endpoint: Some(
            serde_json::from_value(
                load_fixture("endpoints/list_source_endpoints.json")["data"][0].clone(),
            )
            .expect("endpoint fixture"),
        ),
        authentication: Some(
            serde_json::from_value(
                load_fixture("authentications/list_endpoint_authentications.json")["data"][0]
                    .clone(),
            )
            .expect("authentication fixture"),
        ),
    };

    let actions = harness
        .handle_and_collect(
            Action::SubmitSourceUpdate {
                detail: Box::new(detail),
                form: test_form(),
            },
            2,
        )
        .await;

    assert!(
        actions
            .iter()
            .any(|a| matches!(a, Action::Notify(ToastLevel::Success, _))),
        "Should send a success toast"
    );
    assert!(
        actions.iter().any(|a| matches!(a, Action::LoadSources)),
        "Should request a list reload"
    );
}

#[tokio::test]
async fn test_remove_source_success_reloads() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("DELETE"))
        .and(path("/sources/750"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::RemoveSource {
                source_id: "750".to_string(),
                source_name: "AWS production".to_string(),
            },
            2,
        )
        .await;

    assert!(
        actions.iter().any(|a| matches!(
            a,
            Action::Notify(ToastLevel::Success, message) if message.contains("AWS production")
        )),
        "Should send a success toast naming the source"
    );
    assert!(
        actions
            .iter()
            .any(|a| matches!(a, Action::SourceRemoved(Ok(id)) if id == "750")),
        "Should send SourceRemoved(Ok)"
    );
    assert!(
        actions.iter().any(|a| matches!(a, Action::LoadSources)),
        "Should request a list reload"
    );
}

#[tokio::test]
async fn test_remove_source_failure_clears_loading_without_reload() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("DELETE"))
        .and(path("/sources/750"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::RemoveSource {
                source_id: "750".to_string(),
                source_name: "AWS production".to_string(),
            },
            2,
        )
        .await;

    assert!(
        actions.iter().any(|a| matches!(
            a,
            Action::Notify(ToastLevel::Error, message) if message == "Source removal failed."
        )),
        "The toast should carry the removal failure message"
    );
    assert!(
        actions.iter().any(|a| matches!(a, Action::Loading(false))),
        "Should clear the loading flag"
    );
    assert!(
        !actions.iter().any(|a| matches!(a, Action::LoadSources)),
        "A failed removal keeps the current list"
    );
}
