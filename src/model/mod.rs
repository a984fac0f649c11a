use anyhow::Result;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::web::error::ChatError;
use crate::web::models::{ChatCompletionRequest, Message, Role};

pub const MODEL_ID: &str = "meta-llama/Llama-3.2-1B-Instruct";
pub const MAX_TOKENS: u32 = 200;
pub const MAX_CONTEXT_CHARS: usize = 3000;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const NO_ANSWER: &str = "No answer";

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that answers questions based on the provided document. Be concise.";

/// Keeps the first `MAX_CONTEXT_CHARS` characters, never splitting a code point.
pub fn truncate_context(context: &str) -> &str {
    match context.char_indices().nth(MAX_CONTEXT_CHARS) {
        Some((idx, _)) => &context[..idx],
        None => context,
    }
}

pub fn build_payload(context: &str, question: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: MODEL_ID.to_string(),
        messages: vec![
            Message {
                role: Role::System,
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: Role::User,
                content: format!("Document:\n{}\n\nQuestion: {}", context, question),
            },
        ],
        max_tokens: MAX_TOKENS,
    }
}

/// Pulls `choices[0].message.content` out of a completion, falling back to
/// `NO_ANSWER` when any step of the path is missing or not a string.
pub fn extract_answer(response_json: &Value) -> String {
    response_json
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .unwrap_or(NO_ANSWER)
        .to_string()
}

// Client for the OpenAI-compatible chat completions endpoint
pub struct InferenceClient {
    api_url: String,
    token: Option<String>,
    client: Client,
}

impl InferenceClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(config: &Config, timeout: Duration) -> Result<Self> {
        info!("Using inference API at: {}", config.api_url);
        if config.hf_token.is_none() {
            info!("No HF_TOKEN configured, upstream calls will be unauthenticated");
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_url: config.api_url.clone(),
            token: config.hf_token.clone(),
            client,
        })
    }

    pub async fn ask(&self, context: &str, question: &str) -> Result<String, ChatError> {
        let payload = build_payload(context, question);
        debug!("Payload: {:?}", payload);

        // .json() also sets Content-Type: application/json
        let mut request = self.client.post(&self.api_url).json(&payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let error_text = response.text().await?;
            debug!("Upstream returned {}: {}", status, error_text);
            return Err(ChatError::Upstream(error_text));
        }

        let body = response.text().await?;
        let response_json: Value = serde_json::from_str(&body)?;
        debug!("Response JSON: {}", response_json);

        let answer = extract_answer(&response_json);
        info!("Answer length: {} characters", answer.chars().count());
        Ok(answer)
    }
}
