// src/inference/invoker.rs
//! Model invocation with an ordered fallback chain - first success wins

use super::dialect::ModelRegistry;
use crate::config::ModelConfig;
use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// One inference call, fully described. Built fresh per invocation.
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub candidate_models: Vec<String>,
}

/// A completion from exactly one successfully responding candidate
#[derive(Debug, Clone)]
pub struct InferenceResult {
    pub text: String,
    pub model_used: String,
    /// Candidates tried and failed before the successful one
    pub attempted_models: Vec<String>,
}

#[derive(Debug, Error)]
pub enum InvokerError {
    /// Every candidate either lacked a registered wire profile or failed.
    /// Terminal for the current pipeline step; callers substitute their
    /// placeholder text instead of retrying.
    #[error("all candidate models failed to respond (attempted: {})", attempted.join(", "))]
    Exhausted {
        attempted: Vec<String>,
        last_error: Option<String>,
    },
}

/// The model endpoint boundary: one call in, one serialized envelope out.
/// Swapped for a scripted fake in tests.
pub trait ModelTransport: Send + Sync {
    fn send(
        &self,
        model_id: &str,
        body: &Value,
    ) -> impl std::future::Future<Output = Result<Value>> + Send;
}

/// HTTP transport against the hosted model runtime
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }
}

impl ModelTransport for HttpTransport {
    async fn send(&self, model_id: &str, body: &Value) -> Result<Value> {
        let url = format!("{}/model/{}/invoke", self.base_url, model_id);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to call model endpoint: {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<Value>()
                .await
                .context("Failed to parse model response envelope")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Model endpoint returned status {}: {}", status, error_text)
        }
    }
}

/// Texts-in, text-out surface the feature services depend on. Implemented by
/// [`ModelInvoker`] and by fixture clients in tests.
pub trait Completion: Send + Sync {
    fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> impl std::future::Future<Output = Result<String, InvokerError>> + Send;
}

/// Tries candidates in order until one produces a completion.
///
/// The primary model may be rate-limited or access-restricted per deployment
/// region; the fallback chain trades latency for availability without the
/// caller knowing provider details.
pub struct ModelInvoker<T: ModelTransport> {
    transport: T,
    registry: ModelRegistry,
    candidates: Vec<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ModelInvoker<HttpTransport> {
    /// Build the production invoker from configuration
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.endpoint_url.clone())?;

        Ok(Self::new(
            transport,
            ModelRegistry::with_defaults(),
            config.candidate_models(),
            config.max_tokens,
            config.temperature,
        ))
    }
}

impl<T: ModelTransport> ModelInvoker<T> {
    pub fn new(
        transport: T,
        registry: ModelRegistry,
        candidates: Vec<String>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            transport,
            registry,
            candidates,
            max_tokens,
            temperature,
        }
    }

    /// Invoke with this invoker's configured token/temperature defaults
    pub async fn invoke(&self, prompt: &str) -> Result<InferenceResult, InvokerError> {
        self.invoke_with(prompt, self.max_tokens, self.temperature)
            .await
    }

    /// Walk the candidate list in order. Candidates without a registered
    /// wire profile are skipped without being attempted. Any failure
    /// (network, auth, throttling, unusable envelope) advances the chain;
    /// the first extracted completion is returned immediately.
    pub async fn invoke_with(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<InferenceResult, InvokerError> {
        let request = InferenceRequest {
            prompt: prompt.to_string(),
            max_tokens,
            temperature,
            candidate_models: self.candidates.clone(),
        };

        self.invoke_request(&request).await
    }

    async fn invoke_request(
        &self,
        request: &InferenceRequest,
    ) -> Result<InferenceResult, InvokerError> {
        let mut attempted: Vec<String> = Vec::new();
        let mut last_error: Option<String> = None;

        for name in &request.candidate_models {
            let profile = match self.registry.profile(name) {
                Some(profile) => profile,
                None => continue,
            };

            let body =
                profile
                    .dialect
                    .request_body(&request.prompt, request.max_tokens, request.temperature);

            info!("Attempting to invoke model: {}", profile.model_id);

            match self.transport.send(&profile.model_id, &body).await {
                Ok(envelope) => match profile.dialect.extract_text(&envelope) {
                    Some(text) => {
                        return Ok(InferenceResult {
                            text,
                            model_used: name.clone(),
                            attempted_models: attempted,
                        });
                    }
                    None => {
                        warn!("Unusable response envelope from model: {}", name);
                        last_error = Some(format!("unusable response envelope from {}", name));
                        attempted.push(name.clone());
                    }
                },
                Err(e) => {
                    warn!("Model invocation error for {}: {}", name, e);
                    last_error = Some(e.to_string());
                    attempted.push(name.clone());
                }
            }
        }

        Err(InvokerError::Exhausted {
            attempted,
            last_error,
        })
    }
}

impl<T: ModelTransport> Completion for ModelInvoker<T> {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, InvokerError> {
        self.invoke_with(prompt, max_tokens, temperature)
            .await
            .map(|result| result.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::dialect::RequestDialect;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct ScriptedTransport {
        outcomes: HashMap<String, Result<Value, String>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        fn new(outcomes: Vec<(&str, Result<Value, String>)>) -> Self {
            Self {
                outcomes: outcomes
                    .into_iter()
                    .map(|(id, outcome)| (id.to_string(), outcome))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ModelTransport for ScriptedTransport {
        async fn send(&self, model_id: &str, _body: &Value) -> Result<Value> {
            self.calls.lock().unwrap().push(model_id.to_string());
            match self.outcomes.get(model_id) {
                Some(Ok(envelope)) => Ok(envelope.clone()),
                Some(Err(message)) => anyhow::bail!("{}", message),
                None => anyhow::bail!("no script for {}", model_id),
            }
        }
    }

    fn test_registry() -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry.register("alpha", "alpha-v1", RequestDialect::MessageEnvelope);
        registry.register("beta", "beta-v1", RequestDialect::MessageEnvelope);
        registry.register("gamma", "gamma-v1", RequestDialect::ContentArray);
        registry
    }

    fn envelope(text: &str) -> Value {
        json!({ "output": { "message": { "content": [{ "text": text }] } } })
    }

    fn candidates(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let transport = ScriptedTransport::new(vec![
            ("alpha-v1", Ok(envelope("from alpha"))),
            ("beta-v1", Ok(envelope("from beta"))),
        ]);
        let invoker = ModelInvoker::new(
            transport,
            test_registry(),
            candidates(&["alpha", "beta"]),
            1000,
            0.7,
        );

        let result = invoker.invoke("prompt").await.unwrap();

        assert_eq!(result.text, "from alpha");
        assert_eq!(result.model_used, "alpha");
        assert!(result.attempted_models.is_empty());
        // No candidate is called after a success
        assert_eq!(invoker.transport.calls(), vec!["alpha-v1"]);
    }

    #[tokio::test]
    async fn test_fallback_advances_on_failure() {
        let transport = ScriptedTransport::new(vec![
            ("alpha-v1", Err("throttled".to_string())),
            ("beta-v1", Ok(envelope("from beta"))),
        ]);
        let invoker = ModelInvoker::new(
            transport,
            test_registry(),
            candidates(&["alpha", "beta"]),
            1000,
            0.7,
        );

        let result = invoker.invoke("prompt").await.unwrap();

        assert_eq!(result.text, "from beta");
        assert_eq!(result.model_used, "beta");
        assert_eq!(result.attempted_models, vec!["alpha"]);
    }

    #[tokio::test]
    async fn test_unregistered_candidates_are_skipped_not_attempted() {
        let transport = ScriptedTransport::new(vec![("beta-v1", Ok(envelope("from beta")))]);
        let invoker = ModelInvoker::new(
            transport,
            test_registry(),
            candidates(&["no-such-model", "beta"]),
            1000,
            0.7,
        );

        let result = invoker.invoke("prompt").await.unwrap();

        assert_eq!(result.model_used, "beta");
        assert!(result.attempted_models.is_empty());
        assert_eq!(invoker.transport.calls(), vec!["beta-v1"]);
    }

    #[tokio::test]
    async fn test_exhausted_when_all_fail() {
        let transport = ScriptedTransport::new(vec![
            ("alpha-v1", Err("network down".to_string())),
            ("beta-v1", Err("access denied".to_string())),
        ]);
        let invoker = ModelInvoker::new(
            transport,
            test_registry(),
            candidates(&["alpha", "beta"]),
            1000,
            0.7,
        );

        let err = invoker.invoke("prompt").await.unwrap_err();
        let InvokerError::Exhausted {
            attempted,
            last_error,
        } = err;

        assert_eq!(attempted, vec!["alpha", "beta"]);
        assert!(last_error.unwrap().contains("access denied"));
    }

    #[tokio::test]
    async fn test_exhausted_when_no_candidate_has_profile() {
        let transport = ScriptedTransport::new(vec![]);
        let invoker = ModelInvoker::new(
            transport,
            test_registry(),
            candidates(&["unknown-a", "unknown-b"]),
            1000,
            0.7,
        );

        let err = invoker.invoke("prompt").await.unwrap_err();
        let InvokerError::Exhausted { attempted, .. } = err;

        assert!(attempted.is_empty());
        assert!(invoker.transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unusable_envelope_counts_as_failure() {
        let transport = ScriptedTransport::new(vec![
            ("alpha-v1", Ok(json!({ "unexpected": "shape" }))),
            ("gamma-v1", Ok(json!({ "content": [{ "text": "flat" }] }))),
        ]);
        let invoker = ModelInvoker::new(
            transport,
            test_registry(),
            candidates(&["alpha", "gamma"]),
            1000,
            0.7,
        );

        let result = invoker.invoke("prompt").await.unwrap();

        assert_eq!(result.text, "flat");
        assert_eq!(result.attempted_models, vec!["alpha"]);
    }
}
