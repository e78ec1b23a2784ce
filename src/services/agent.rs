// src/services/agent.rs
//! Conversational career copilot - one completion per message with bounded
//! history context

use crate::inference::Completion;
use crate::prompt::{self, Turn};
use std::sync::Arc;
use tracing::error;

const APOLOGY: &str = "I apologize, but I'm experiencing technical difficulties. \
Please try again in a moment.";

pub struct CareerAgent<C> {
    client: Arc<C>,
    max_tokens: u32,
    temperature: f32,
}

impl<C: Completion> CareerAgent<C> {
    pub fn new(client: Arc<C>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            client,
            max_tokens,
            temperature,
        }
    }

    /// Process one user message against the conversation so far. Never
    /// errors toward the caller; a failed invocation becomes the apology
    /// message.
    pub async fn process_message(&self, message: &str, history: &[Turn]) -> String {
        let context = prompt::chat_context(message, history);

        match self
            .client
            .complete(&context, self.max_tokens, self.temperature)
            .await
        {
            Ok(response) => format_response(&response),
            Err(e) => {
                error!("Agent processing error: {}", e);
                APOLOGY.to_string()
            }
        }
    }
}

/// Light readability formatting: break out numbered items when the response
/// reads like a list of steps
fn format_response(response: &str) -> String {
    let formatted = response.trim().to_string();
    let lower = formatted.to_lowercase();

    if lower.contains("steps") || lower.contains("recommendations") {
        formatted
            .replace("1.", "\n1.")
            .replace("2.", "\n2.")
            .replace("3.", "\n3.")
    } else {
        formatted
    }
}
