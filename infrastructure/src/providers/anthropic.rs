//! Anthropic Messages API adapter for the completion gateway
//!
//! One POST per chunk; no streaming, no conversation state. The
//! interesting part is fault classification: HTTP detail is mapped
//! onto [`ServiceFault`] here so retry decisions upstream never look
//! at status codes.

use crate::config::FileProviderConfig;
use async_trait::async_trait;
use decksmith_application::ports::completion::{CompletionError, CompletionGateway};
use decksmith_domain::ServiceFault;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Client for the `/v1/messages` completion endpoint
pub struct AnthropicCompletionClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    api_version: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [MessageParam<'a>; 1],
}

#[derive(Serialize)]
struct MessageParam<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl AnthropicCompletionClient {
    /// Build a client from the `[provider]` config section.
    ///
    /// Fails with a [`ServiceFault::Auth`] error when no API key can
    /// be resolved from the config value or the named env var.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, CompletionError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            CompletionError::new(
                ServiceFault::Auth,
                format!(
                    "no API key: set {} or provider.api_key in the config file",
                    config.api_key_env
                ),
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            api_version: config.api_version.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionGateway for AnthropicCompletionClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError> {
        let url = format!("{}/v1/messages", self.base_url);
        let request = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: [MessageParam {
                role: "user",
                content: prompt,
            }],
        };

        debug!("POST {} (model {}, max_tokens {})", url, self.model, max_tokens);
        let response = match self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => return Err(classify_transport(&error)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_http(status, &body));
        }

        let body: MessagesResponse = match response.json().await {
            Ok(body) => body,
            Err(error) => {
                return Err(CompletionError::new(
                    ServiceFault::Unknown,
                    format!("unreadable response body: {error}"),
                ));
            }
        };

        let text: String = body
            .content
            .iter()
            .map(|block| block.text.as_str())
            .collect();
        if text.is_empty() {
            return Err(CompletionError::new(
                ServiceFault::Unknown,
                "response contained no text content",
            ));
        }
        Ok(text)
    }
}

fn classify_transport(error: &reqwest::Error) -> CompletionError {
    if error.is_timeout() || error.is_connect() {
        CompletionError::new(
            ServiceFault::Transient,
            format!("transport failure: {error}"),
        )
    } else {
        CompletionError::new(ServiceFault::Unknown, format!("request failed: {error}"))
    }
}

fn classify_http(status: StatusCode, body: &str) -> CompletionError {
    let message = error_message(status, body);
    let fault = match status.as_u16() {
        401 | 403 => ServiceFault::Auth,
        // A 429 is only worth retrying when it is actual rate
        // pressure; an exhausted credit balance never recovers on
        // its own.
        429 if mentions_quota(&message) => ServiceFault::QuotaExhausted,
        429 => ServiceFault::RateLimited,
        500..=599 => ServiceFault::Transient,
        _ => ServiceFault::Unknown,
    };
    CompletionError::new(fault, message)
}

/// Pull the service's own message out of the error envelope, falling
/// back to the status line when the body is not the expected JSON.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {trimmed}")
            }
        })
}

fn mentions_quota(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("credit") || lower.contains("quota") || lower.contains("billing")
}
