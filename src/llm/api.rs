// LogSage - llm/api.rs
//
// Wire types for the Azure OpenAI chat-completion and embedding endpoints.
// Request types serialise, response types deserialise; nothing here talks
// to the network.

use serde::{Deserialize, Serialize};

// =============================================================================
// Chat completion
// =============================================================================

/// One chat message. The analysis flow only ever sends a single user message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion request body. The deployment (model) is addressed in the
/// URL, not the body, per the Azure API shape.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Chat-completion response body. Only the fields the analyser reads are
/// modelled; unknown fields are ignored by serde.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    pub content: String,
}

// =============================================================================
// Embeddings
// =============================================================================

/// Embedding request body: a single input string.
#[derive(Debug, Serialize)]
pub struct EmbeddingRequest {
    pub input: String,
}

/// Embedding response body.
#[derive(Debug, Deserialize)]
pub struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingData {
    pub embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serialises_expected_fields() {
        let request = ChatCompletionRequest {
            messages: vec![ChatMessage::user("explain this")],
            temperature: 0.1,
            max_tokens: 1500,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "explain this");
        assert_eq!(json["max_tokens"], 1500);
    }

    #[test]
    fn test_chat_response_ignores_unknown_fields() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "finish_reason": "stop",
                 "message": {"role": "assistant", "content": "Root cause: disk full."}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "Root cause: disk full.");
    }

    #[test]
    fn test_embedding_response_decodes_vector() {
        let body = r#"{"object":"list","data":[{"object":"embedding","index":0,"embedding":[0.1,-0.2,0.3]}]}"#;
        let response: EmbeddingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data[0].embedding, vec![0.1, -0.2, 0.3]);
    }
}
