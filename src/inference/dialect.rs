// src/inference/dialect.rs
//! Wire-format adapters - one per model family request/response shape

use serde_json::{json, Value};
use std::collections::HashMap;

/// How a model family expects its request body shaped and where the
/// generated text lives in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDialect {
    /// Nested `messages/content/inferenceConfig` body; the completion sits at
    /// `output.message.content[0].text`.
    MessageEnvelope,
    /// Flat body with a top-level `max_tokens` and plain string message
    /// content; the completion sits at `content[0].text`.
    ContentArray,
}

impl RequestDialect {
    /// Build the provider-specific request body
    pub fn request_body(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Value {
        match self {
            RequestDialect::MessageEnvelope => json!({
                "messages": [
                    {
                        "role": "user",
                        "content": [{ "text": prompt }]
                    }
                ],
                "inferenceConfig": {
                    "maxTokens": max_tokens,
                    "temperature": temperature
                }
            }),
            RequestDialect::ContentArray => json!({
                "max_tokens": max_tokens,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ],
                "temperature": temperature
            }),
        }
    }

    /// Navigate the response envelope to the generated text field
    pub fn extract_text(&self, envelope: &Value) -> Option<String> {
        let text = match self {
            RequestDialect::MessageEnvelope => envelope
                .get("output")?
                .get("message")?
                .get("content")?
                .get(0)?
                .get("text")?,
            RequestDialect::ContentArray => envelope.get("content")?.get(0)?.get("text")?,
        };

        text.as_str().map(|s| s.to_string())
    }
}

/// Registered wire settings for one candidate model name
#[derive(Debug, Clone)]
pub struct ModelProfile {
    pub model_id: String,
    pub dialect: RequestDialect,
}

/// Maps short candidate names to their wire profiles. Candidates without an
/// entry have no known request-body mapping and are skipped by the invoker.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    profiles: HashMap<String, ModelProfile>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry covering the model families this deployment knows how to call
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            "nova-micro",
            "us.amazon.nova-micro-v1:0",
            RequestDialect::MessageEnvelope,
        );
        registry.register(
            "nova-lite",
            "us.amazon.nova-lite-v1:0",
            RequestDialect::MessageEnvelope,
        );
        registry.register(
            "claude-haiku",
            "anthropic.claude-3-haiku-20240307-v1:0",
            RequestDialect::ContentArray,
        );
        registry.register(
            "claude-sonnet",
            "anthropic.claude-3-sonnet-20240229-v1:0",
            RequestDialect::ContentArray,
        );
        registry
    }

    pub fn register(&mut self, name: &str, model_id: &str, dialect: RequestDialect) {
        self.profiles.insert(
            name.to_string(),
            ModelProfile {
                model_id: model_id.to_string(),
                dialect,
            },
        );
    }

    pub fn profile(&self, name: &str) -> Option<&ModelProfile> {
        self.profiles.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_envelope_body() {
        let body = RequestDialect::MessageEnvelope.request_body("hello", 500, 0.3);

        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"][0]["text"], "hello");
        assert_eq!(body["inferenceConfig"]["maxTokens"], 500);
    }

    #[test]
    fn test_content_array_body() {
        let body = RequestDialect::ContentArray.request_body("hello", 600, 0.4);

        assert_eq!(body["max_tokens"], 600);
        assert_eq!(body["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_extract_text_message_envelope() {
        let envelope = serde_json::json!({
            "output": { "message": { "content": [{ "text": "generated" }] } }
        });

        assert_eq!(
            RequestDialect::MessageEnvelope.extract_text(&envelope),
            Some("generated".to_string())
        );
        assert_eq!(RequestDialect::ContentArray.extract_text(&envelope), None);
    }

    #[test]
    fn test_extract_text_content_array() {
        let envelope = serde_json::json!({
            "content": [{ "text": "generated" }]
        });

        assert_eq!(
            RequestDialect::ContentArray.extract_text(&envelope),
            Some("generated".to_string())
        );
        assert_eq!(RequestDialect::MessageEnvelope.extract_text(&envelope), None);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = ModelRegistry::with_defaults();

        assert!(registry.profile("nova-micro").is_some());
        assert!(registry.profile("unknown-model").is_none());
        assert_eq!(
            registry.profile("claude-haiku").unwrap().dialect,
            RequestDialect::ContentArray
        );
    }
}
