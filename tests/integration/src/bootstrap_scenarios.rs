//! Bootstrap scenarios through the server
//!
//! Each scenario sends one `bootstrap_project` call and checks both the
//! reported result and what was left on disk and on the remote.

use std::sync::Arc;

use bootstrap_git::ShellRunner;
use bootstrap_mcp::{Dispatcher, McpServer};
use bootstrap_test_utils::git::{assert_git_repo, is_git_repo};
use bootstrap_test_utils::github::FakeRepositoryClient;
use bootstrap_test_utils::runner::FailingRunner;
use bootstrap_test_utils::workspace::TestWorkspace;
use serde_json::{Value, json};

async fn bootstrap(server: &McpServer, base: String, project: &str) -> (Value, Value) {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {
            "name": "bootstrap_project",
            "arguments": {
                "baseDirectory": base,
                "projectName": project,
                "description": "Scenario project"
            }
        }
    });
    let response: Value =
        serde_json::from_str(&server.handle_message(&request.to_string()).await.unwrap()).unwrap();
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    let result = serde_json::from_str(text).unwrap();
    (response, result)
}

fn server(client: Arc<FakeRepositoryClient>) -> McpServer {
    McpServer::new(Dispatcher::new(client, Arc::new(ShellRunner::new())))
}

#[tokio::test]
async fn creates_nested_base_directories() {
    let ws = TestWorkspace::new();
    let base = ws.child("work").join("projects");
    let client = Arc::new(FakeRepositoryClient::new());

    let (response, result) =
        bootstrap(&server(client.clone()), base.display().to_string(), "demo").await;

    assert!(response["result"].get("isError").is_none());
    assert_eq!(result["success"], true);
    assert_eq!(
        result["message"],
        format!(
            "Successfully bootstrapped project 'demo': local git repo at {} and GitHub repo created",
            base.join("demo").display()
        )
    );
    assert_git_repo(&base.join("demo"));
    assert_eq!(client.create_calls()[0].description(), Some("Scenario project"));
}

#[tokio::test]
async fn blocked_base_never_reaches_github() {
    let ws = TestWorkspace::new();
    let base = ws.block_with_file("work");
    let client = Arc::new(FakeRepositoryClient::new());

    let (response, result) =
        bootstrap(&server(client.clone()), base.display().to_string(), "demo").await;

    assert_eq!(response["result"]["isError"], true);
    assert_eq!(result["success"], false);
    assert!(result.get("data").is_none());
    let message = result["message"].as_str().unwrap();
    assert!(
        message.starts_with(&format!(
            "Error initializing git repo at {}: ",
            base.join("demo").display()
        )),
        "unexpected message: {message}"
    );
    assert!(client.create_calls().is_empty());
}

#[tokio::test]
async fn failing_git_never_reaches_github() {
    let ws = TestWorkspace::new();
    let client = Arc::new(FakeRepositoryClient::new());
    let runner = Arc::new(FailingRunner::new("fatal: not permitted"));
    let server = McpServer::new(Dispatcher::new(client.clone(), runner.clone()));

    let (_, result) = bootstrap(&server, ws.base(), "demo").await;

    assert_eq!(result["success"], false);
    assert!(result["message"].as_str().unwrap().contains("fatal: not permitted"));
    assert_eq!(runner.calls(), 1);
    assert!(client.create_calls().is_empty());
    // The directory was created before git ran
    assert!(ws.child("demo").is_dir());
    assert!(!is_git_repo(&ws.child("demo")));
}

#[tokio::test]
async fn remote_rejection_leaves_local_repository() {
    let ws = TestWorkspace::new();
    let client = Arc::new(FakeRepositoryClient::failing(
        422,
        "name already exists on this account",
    ));

    let (response, result) = bootstrap(&server(client.clone()), ws.base(), "demo").await;

    assert_eq!(response["result"]["isError"], true);
    assert_eq!(result["success"], false);
    let message = result["message"].as_str().unwrap();
    assert!(message.starts_with(&format!(
        "Initialized git repo at {} but failed to create remote repository: ",
        ws.child("demo").display()
    )));
    assert!(message.contains("name already exists on this account"));
    assert_git_repo(&ws.child("demo"));
    assert_eq!(client.create_calls().len(), 1);
}

#[tokio::test]
async fn rerun_after_remote_failure_succeeds() {
    let ws = TestWorkspace::new();

    let (_, first) = bootstrap(
        &server(Arc::new(FakeRepositoryClient::failing(502, "Bad gateway"))),
        ws.base(),
        "demo",
    )
    .await;
    assert_eq!(first["success"], false);

    // Existing local repository is reused on the retry
    let (_, second) = bootstrap(&server(Arc::new(FakeRepositoryClient::new())), ws.base(), "demo").await;
    assert_eq!(second["success"], true);
    assert_git_repo(&ws.child("demo"));
}

#[tokio::test]
async fn absolute_project_name_stays_out_of_other_directories() {
    let ws = TestWorkspace::new();
    let elsewhere = TestWorkspace::new();
    let escaped = elsewhere.child("escaped");
    let client = Arc::new(FakeRepositoryClient::new());

    let (response, result) =
        bootstrap(&server(client.clone()), ws.base(), &escaped.display().to_string()).await;

    assert_eq!(response["result"]["isError"], true);
    assert_eq!(result["success"], false);
    assert!(
        result["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid arguments for bootstrap_project:")
    );
    assert!(!escaped.exists());
    assert!(client.create_calls().is_empty());
}
