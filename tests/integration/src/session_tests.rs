//! End-to-end MCP sessions
//!
//! Drives `McpServer::serve` with a full client transcript, the way an
//! agent would over stdio, using the real `git` binary and an in-memory
//! GitHub client.

use std::sync::Arc;

use bootstrap_git::ShellRunner;
use bootstrap_mcp::{Dispatcher, McpServer};
use bootstrap_test_utils::git::assert_git_repo;
use bootstrap_test_utils::github::FakeRepositoryClient;
use bootstrap_test_utils::workspace::TestWorkspace;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

async fn run_session(client: Arc<FakeRepositoryClient>, requests: &[Value]) -> Vec<Value> {
    let server = McpServer::new(Dispatcher::new(client, Arc::new(ShellRunner::new())));

    let mut input = String::new();
    for request in requests {
        input.push_str(&request.to_string());
        input.push('\n');
    }

    let mut output = Vec::new();
    server.serve(input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn tool_call(id: u64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
}

fn tool_result(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[tokio::test]
async fn full_session_bootstraps_project() {
    let ws = TestWorkspace::new();
    let client = Arc::new(FakeRepositoryClient::new());

    let responses = run_session(
        client.clone(),
        &[
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "test-agent", "version": "1.0" }
                }
            }),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
            tool_call(
                3,
                "bootstrap_project",
                json!({ "baseDirectory": ws.base(), "projectName": "demo", "private": true }),
            ),
            tool_call(4, "list_github_repos", json!({})),
        ],
    )
    .await;

    // The notification produces no response
    assert_eq!(responses.len(), 4);
    let ids: Vec<&Value> = responses.iter().map(|r| &r["id"]).collect();
    assert_eq!(ids, vec![&json!(1), &json!(2), &json!(3), &json!(4)]);

    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "bootstrap-mcp");
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 5);

    let bootstrap = tool_result(&responses[2]);
    assert_eq!(bootstrap["success"], true);
    assert_eq!(
        bootstrap["data"]["localPath"],
        ws.child("demo").display().to_string()
    );
    assert_eq!(bootstrap["data"]["githubRepo"]["name"], "demo");
    assert_git_repo(&ws.child("demo"));

    let listing = tool_result(&responses[3]);
    assert_eq!(listing["message"], "Found 1 repositories");
    assert_eq!(
        listing["data"],
        json!([{ "name": "demo", "url": "https://github.com/octocat/demo", "private": true }])
    );

    let calls = client.create_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].is_private());
}

#[tokio::test]
async fn local_tools_compose() {
    let ws = TestWorkspace::new();

    let responses = run_session(
        Arc::new(FakeRepositoryClient::new()),
        &[
            tool_call(
                1,
                "create_local_directory",
                json!({ "baseDirectory": ws.base(), "projectName": "app" }),
            ),
            tool_call(
                2,
                "create_local_directory",
                json!({ "baseDirectory": ws.base(), "projectName": "app" }),
            ),
            tool_call(
                3,
                "initialize_git_repository",
                json!({ "baseDirectory": ws.base(), "newDirectoryName": "app" }),
            ),
        ],
    )
    .await;

    let created = tool_result(&responses[0]);
    assert_eq!(created["success"], true);
    assert!(responses[0]["result"].get("isError").is_none());

    let again = tool_result(&responses[1]);
    assert_eq!(
        again,
        json!({
            "success": false,
            "message": format!("Directory already exists at {}!", ws.child("app").display())
        })
    );
    assert_eq!(responses[1]["result"]["isError"], true);

    let init = tool_result(&responses[2]);
    assert_eq!(init["success"], true);
    assert_git_repo(&ws.child("app"));
}

#[tokio::test]
async fn protocol_errors_do_not_end_the_session() {
    let responses = run_session(
        Arc::new(FakeRepositoryClient::new()),
        &[
            Value::String("not a request".into()),
            json!({ "jsonrpc": "2.0", "id": "a", "method": "resources/list" }),
            json!({ "jsonrpc": "2.0", "id": "b", "method": "tools/call", "params": {} }),
            tool_call(7, "", json!({})),
            json!({ "jsonrpc": "2.0", "id": "c", "method": "ping" }),
        ],
    )
    .await;

    assert_eq!(responses.len(), 5);
    assert_eq!(responses[0]["error"]["code"], -32600);
    assert_eq!(responses[1]["error"]["code"], -32601);
    assert_eq!(responses[2]["error"]["code"], -32602);
    assert_eq!(tool_result(&responses[3])["message"], "Unknown tool: ");
    assert_eq!(responses[4]["id"], "c");
    assert_eq!(responses[4]["result"], json!({}));
}
