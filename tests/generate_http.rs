mod common;

use common::TestContext;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;

const MODEL: &str = "gemini-test";
const ENDPOINT: &str = "/models/gemini-test:generateContent";

fn reply(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
    .to_string()
}

#[test]
fn generate_posts_prompt_and_writes_cleaned_script() {
    let ctx = TestContext::new();
    ctx.write_deployment_with("s2d.toml", "rebootAfterCompletion", "true");

    let mut server = Server::new();
    ctx.write_settings(&server.url(), MODEL);
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Cluster Name: S2DCluster".into()),
            Matcher::Regex("reboot all storage nodes unconditionally".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply("```powershell\nNew-Cluster -Name S2DCluster\nRestart-Computer\n```"))
        .expect(1)
        .create();

    ctx.cli()
        .args(["generate", "s2d.toml"])
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .success();

    mock.assert();
    assert_eq!(ctx.read("Deploy-S2D.ps1"), "New-Cluster -Name S2DCluster\nRestart-Computer");
}

#[test]
fn generate_falls_back_to_google_api_key() {
    let ctx = TestContext::new();
    ctx.write_default_deployment();

    let mut server = Server::new();
    ctx.write_settings(&server.url(), MODEL);
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", "google-key")
        .with_status(200)
        .with_body(reply("Get-ClusterNode"))
        .create();

    ctx.cli()
        .args(["generate", "s2d.toml", "--stdout"])
        .env("GOOGLE_API_KEY", "google-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("Get-ClusterNode"));

    mock.assert();
}

#[test]
fn model_flag_overrides_settings() {
    let ctx = TestContext::new();
    ctx.write_default_deployment();

    let mut server = Server::new();
    ctx.write_settings(&server.url(), "ignored-model");
    let mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(reply("Get-StoragePool"))
        .create();

    ctx.cli()
        .args(["generate", "s2d.toml", "--stdout", "--model", MODEL])
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("Get-StoragePool"));

    mock.assert();
}

#[test]
fn api_error_is_reported_without_retry() {
    let ctx = TestContext::new();
    ctx.write_default_deployment();

    let mut server = Server::new();
    ctx.write_settings(&server.url(), MODEL);
    let mock = server
        .mock("POST", ENDPOINT)
        .with_status(500)
        .with_body("backend unavailable")
        .expect(1)
        .create();

    ctx.cli()
        .args(["generate", "s2d.toml"])
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to generate script: API error (500)"));

    mock.assert();
    assert!(!ctx.exists("Deploy-S2D.ps1"));
}

#[test]
fn empty_answer_is_reported_in_json() {
    let ctx = TestContext::new();
    ctx.write_default_deployment();

    let mut server = Server::new();
    ctx.write_settings(&server.url(), MODEL);
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(reply("```powershell\n```"))
        .create();

    let output = ctx
        .cli()
        .args(["generate", "s2d.toml", "--json"])
        .env("GEMINI_API_KEY", "test-key")
        .output()
        .expect("run s2d");

    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["error"], "Failed to generate script: Empty response from AI.");
}

#[test]
fn blocked_prompt_is_reported() {
    let ctx = TestContext::new();
    ctx.write_default_deployment();

    let mut server = Server::new();
    ctx.write_settings(&server.url(), MODEL);
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string())
        .create();

    ctx.cli()
        .args(["generate", "s2d.toml"])
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt blocked by model: SAFETY"));
}
