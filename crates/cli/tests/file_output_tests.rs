//! Integration tests for `--output-file` flag functionality.

mod common;

use common::{sources_cmd, sources_cmd_with_base_path};
use predicates::prelude::*;
use sources_client::testing::load_fixture;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API: &str = "/topological-inventory/v0.1";

async fn mount_list_mocks(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("{API}/source_types")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("source_types/list_source_types.json")),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/sources")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("sources/list_sources.json")),
        )
        .mount(server)
        .await;
}

#[test]
fn test_output_file_flag_in_help() {
    let mut cmd = sources_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output-file"));
}

/// The file gets the payload; stdout stays clean for pipelines and the
/// notice goes to stderr.
#[tokio::test]
async fn test_output_file_writes_json() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("sources.json");

    let server = MockServer::start().await;
    mount_list_mocks(&server).await;

    let mut cmd = sources_cmd_with_base_path(&server.uri());
    cmd.args([
        "sources",
        "list",
        "--output",
        "json",
        "--output-file",
        output_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("Results written to"));

    let content = fs::read_to_string(&output_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed[0]["name"], "AWS production");
}

/// Missing parent directories are created on the way.
#[tokio::test]
async fn test_output_file_creates_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("nested").join("dir").join("sources.csv");

    let server = MockServer::start().await;
    mount_list_mocks(&server).await;

    let mut cmd = sources_cmd_with_base_path(&server.uri());
    cmd.args([
        "sources",
        "list",
        "--output",
        "csv",
        "--output-file",
        output_path.to_str().unwrap(),
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.starts_with("id,name,source_type,uid,created_at,updated_at"));
    assert!(content.contains("750,AWS production,amazon"));
}
