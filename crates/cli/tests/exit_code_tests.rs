//! Integration tests for structured exit codes.
//!
//! These tests verify that sources-cli returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{sources_cmd, sources_cmd_with_base_path};
use serde_json::json;
use sources_client::testing::load_fixture;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API: &str = "/topological-inventory/v0.1";

fn error_body(status: &str, detail: &str) -> serde_json::Value {
    json!({ "errors": [{ "status": status, "detail": detail }] })
}

/// Test that successful commands return exit code 0.
#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/source_types")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("source_types/list_source_types.json")),
        )
        .mount(&server)
        .await;

    let mut cmd = sources_cmd_with_base_path(&server.uri());
    cmd.arg("source-types").assert().code(0);
}

/// Test that a missing base path fails configuration with exit code 1.
#[test]
fn test_missing_base_path_returns_exit_code_1() {
    let mut cmd = sources_cmd();
    cmd.arg("source-types").assert().code(1);
}

/// Test that authentication failures return exit code 2.
#[tokio::test]
async fn test_auth_failure_returns_exit_code_2() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/source_types")))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_body("401", "Unauthorized")))
        .mount(&server)
        .await;

    let mut cmd = sources_cmd_with_base_path(&server.uri());
    cmd.arg("source-types").assert().code(2);
}

/// Test that connection refused returns exit code 3.
#[test]
fn test_connection_refused_returns_exit_code_3() {
    // Use a port that's unlikely to be open
    let mut cmd = sources_cmd_with_base_path("http://localhost:1");
    cmd.arg("source-types").assert().code(3);
}

/// Test that resource not found returns exit code 4.
#[tokio::test]
async fn test_not_found_returns_exit_code_4() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/sources/999")))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body("404", "Record not found")))
        .mount(&server)
        .await;

    let mut cmd = sources_cmd_with_base_path(&server.uri());
    cmd.args(["sources", "show", "999"]).assert().code(4);
}

/// Test that validation failures (400) return exit code 5.
#[tokio::test]
async fn test_bad_request_returns_exit_code_5() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/source_types")))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(error_body("400", "limit is not a number")),
        )
        .mount(&server)
        .await;

    let mut cmd = sources_cmd_with_base_path(&server.uri());
    cmd.arg("source-types").assert().code(5);
}

/// Test that permission denied (403) returns exit code 6.
#[tokio::test]
async fn test_permission_denied_returns_exit_code_6() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/source_types")))
        .respond_with(ResponseTemplate::new(403).set_body_json(error_body("403", "Forbidden")))
        .mount(&server)
        .await;

    let mut cmd = sources_cmd_with_base_path(&server.uri());
    cmd.arg("source-types").assert().code(6);
}

/// Test that rate limiting (429) returns exit code 7.
#[tokio::test]
async fn test_rate_limited_returns_exit_code_7() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/source_types")))
        .respond_with(ResponseTemplate::new(429).set_body_json(error_body("429", "Too many requests")))
        .mount(&server)
        .await;

    let mut cmd = sources_cmd_with_base_path(&server.uri());
    cmd.arg("source-types").assert().code(7);
}

/// Test that service unavailable (503) returns exit code 8.
#[tokio::test]
async fn test_service_unavailable_returns_exit_code_8() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/source_types")))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(error_body("503", "Service unavailable")),
        )
        .mount(&server)
        .await;

    let mut cmd = sources_cmd_with_base_path(&server.uri());
    cmd.arg("source-types").assert().code(8);
}
