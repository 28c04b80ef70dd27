// LogSage - tests/llm_client.rs
//
// Integration tests for the Azure OpenAI client against a local mock HTTP
// server. These exercise the real reqwest transport, header placement,
// JSON encoding/decoding, and error mapping — only the remote service
// itself is substituted.

use logsage::llm::client::{AzureClient, TextCompletion};
use logsage::llm::config::ServiceConfig;
use logsage::util::error::LlmError;
use mockito::Matcher;

/// Configuration pointing at the given mock server.
fn config_for(server: &mockito::ServerGuard) -> ServiceConfig {
    ServiceConfig {
        endpoint: server.url(),
        api_key: "test-key".to_string(),
        api_version: "2024-02-01".to_string(),
        gpt_deployment: "gpt-4o-mini".to_string(),
        embed_deployment: "text-embedding-ada-002".to_string(),
    }
}

#[test]
fn completion_sends_expected_request_and_returns_content() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/openai/deployments/gpt-4o-mini/chat/completions")
        .match_query(Matcher::UrlEncoded(
            "api-version".into(),
            "2024-02-01".into(),
        ))
        .match_header("api-key", "test-key")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({
                "messages": [{"role": "user", "content": "explain this log"}],
                "max_tokens": 1500
            })),
            // temperature is a float; match it loosely via its JSON key.
            Matcher::Regex(r#""temperature""#.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"Disk is full."}}]}"#,
        )
        .expect(1)
        .create();

    let client = AzureClient::new(config_for(&server)).unwrap();
    let result = client.complete("explain this log").unwrap();

    assert_eq!(result, "Disk is full.");
    mock.assert();
}

#[test]
fn completion_maps_service_error_to_api_variant() {
    let mut server = mockito::Server::new();

    server
        .mock("POST", "/openai/deployments/gpt-4o-mini/chat/completions")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error":{"code":"401","message":"Access denied"}}"#)
        .create();

    let client = AzureClient::new(config_for(&server)).unwrap();
    let result = client.complete("prompt");

    match result {
        Err(LlmError::Api { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Access denied"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn completion_with_no_choices_is_empty_response() {
    let mut server = mockito::Server::new();

    server
        .mock("POST", "/openai/deployments/gpt-4o-mini/chat/completions")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create();

    let client = AzureClient::new(config_for(&server)).unwrap();
    let result = client.complete("prompt");
    assert!(matches!(result, Err(LlmError::EmptyResponse)));
}

#[test]
fn completion_with_unexpected_body_is_malformed_response() {
    let mut server = mockito::Server::new();

    server
        .mock("POST", "/openai/deployments/gpt-4o-mini/chat/completions")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>gateway error page</html>")
        .create();

    let client = AzureClient::new(config_for(&server)).unwrap();
    let result = client.complete("prompt");
    assert!(matches!(result, Err(LlmError::MalformedResponse { .. })));
}

#[test]
fn embedding_returns_vector_from_first_data_entry() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock(
            "POST",
            "/openai/deployments/text-embedding-ada-002/embeddings",
        )
        .match_query(Matcher::UrlEncoded(
            "api-version".into(),
            "2024-02-01".into(),
        ))
        .match_header("api-key", "test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "input": "ERROR disk full"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[{"index":0,"embedding":[0.25,-0.5,0.75]}]}"#)
        .expect(1)
        .create();

    let client = AzureClient::new(config_for(&server)).unwrap();
    let vector = client.embed("ERROR disk full").unwrap();

    assert_eq!(vector, vec![0.25, -0.5, 0.75]);
    mock.assert();
}
