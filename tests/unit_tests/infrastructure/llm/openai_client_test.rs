use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use paperlens::application::ports::{LlmClient, LlmClientError};
use paperlens::application::services::build_summary_prompt;
use paperlens::infrastructure::llm::OpenAiClient;

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: Value,
    seen: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

async fn completions(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.seen.lock().unwrap().push((headers, body));
    (stub.status, Json(stub.body.clone())).into_response()
}

/// Serves `/v1/chat/completions` on an ephemeral port and returns its base URL.
async fn spawn_stub(status: StatusCode, body: Value) -> (String, Stub) {
    let stub = Stub {
        status,
        body,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(stub.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/v1"), stub)
}

fn client(base_url: String, azure: bool) -> OpenAiClient {
    OpenAiClient::new(base_url, "sk-test".into(), "gpt-3.5-turbo".into(), azure)
}

#[tokio::test]
async fn given_successful_completion_when_requesting_then_returns_message_content() {
    let (base_url, stub) = spawn_stub(
        StatusCode::OK,
        json!({"choices": [{"message": {"role": "assistant", "content": "## Summary\nok"}}]}),
    )
    .await;

    let content = client(base_url, false)
        .complete(&build_summary_prompt("paper text", 1500, 0.3))
        .await
        .unwrap();

    assert_eq!(content, "## Summary\nok");
    let seen = stub.seen.lock().unwrap();
    let (headers, body) = &seen[0];
    assert_eq!(headers["authorization"], "Bearer sk-test");
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["max_tokens"], 1500);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
}

#[tokio::test]
async fn given_http_429_when_requesting_then_reports_rate_limited() {
    let (base_url, _stub) = spawn_stub(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "slow down"}}),
    )
    .await;

    let result = client(base_url, false)
        .complete(&build_summary_prompt("paper text", 1500, 0.3))
        .await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_requesting_then_reports_request_failure_with_status() {
    let (base_url, _stub) =
        spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})).await;

    let result = client(base_url, false)
        .complete(&build_summary_prompt("paper text", 1500, 0.3))
        .await;

    assert!(matches!(
        result,
        Err(LlmClientError::ApiRequestFailed(msg)) if msg.contains("500")
    ));
}

#[tokio::test]
async fn given_no_choices_when_requesting_then_reports_invalid_response() {
    let (base_url, _stub) = spawn_stub(StatusCode::OK, json!({"choices": []})).await;

    let result = client(base_url, false)
        .complete(&build_summary_prompt("paper text", 1500, 0.3))
        .await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_null_content_when_requesting_then_returns_empty_string() {
    let (base_url, _stub) = spawn_stub(
        StatusCode::OK,
        json!({"choices": [{"message": {"role": "assistant", "content": null}}]}),
    )
    .await;

    let content = client(base_url, false)
        .complete(&build_summary_prompt("paper text", 1500, 0.3))
        .await
        .unwrap();

    assert_eq!(content, "");
}

#[tokio::test]
async fn given_azure_auth_when_requesting_then_sends_api_key_header() {
    let (base_url, stub) = spawn_stub(
        StatusCode::OK,
        json!({"choices": [{"message": {"content": "x"}}]}),
    )
    .await;

    client(base_url, true)
        .complete(&build_summary_prompt("paper text", 1500, 0.3))
        .await
        .unwrap();

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen[0].0["api-key"], "sk-test");
    assert!(seen[0].0.get("authorization").is_none());
}
