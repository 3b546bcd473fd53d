//! Text-completion client.
//!
//! [`CompletionClient`] is the seam the coach talks through. [`GroqClient`]
//! implements it against Groq's OpenAI-compatible chat completions endpoint;
//! tests substitute their own implementations or point the client at a mock
//! server with [`CompletionConfig::with_endpoint`].
//!
//! ## Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `GROQ_API_KEY` | required |
//! | `FITPULSE_COMPLETION_URL` | `https://api.groq.com/openai/v1/chat/completions` |
//! | `FITPULSE_MODEL` | `llama-3.1-8b-instant` |

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ScheduleError},
    models::ChatMessage,
};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "FITPULSE_COMPLETION_URL";

/// Environment variable overriding the model.
pub const MODEL_ENV: &str = "FITPULSE_MODEL";

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Longest slice of an error body carried into a `Completion` error.
const ERROR_BODY_EXCERPT: usize = 200;

/// One-shot chat completion.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends the conversation and returns the reply text.
    ///
    /// A response without content yields an empty string.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Connection settings for [`GroqClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionConfig {
    /// Settings with the given key and every other value at its default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Reads the settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Configuration` if `GROQ_API_KEY` is unset or
    /// empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ScheduleError::configuration(format!(
                    "Missing {API_KEY_ENV} environment variable; the coach needs a Groq API key"
                ))
            })?;

        let mut config = Self::new(api_key);
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            config = config.with_endpoint(endpoint);
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            config = config.with_model(model);
        }
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for WireMessage<'a> {
    fn from(message: &'a ChatMessage) -> Self {
        Self {
            role: message.role.as_str(),
            content: &message.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat completions over Groq's OpenAI-compatible API.
pub struct GroqClient {
    client: Client,
    config: CompletionConfig,
}

impl GroqClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Configuration` if `GROQ_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(CompletionConfig::from_env()?))
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = CompletionRequest {
            model: &self.config.model,
            messages: messages.iter().map(WireMessage::from).collect(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        debug!(
            "Sending {} messages to {} ({})",
            messages.len(),
            self.config.endpoint,
            self.config.model
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Completion request failed: {e}");
                ScheduleError::completion(format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ScheduleError::completion(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            error!("Completion API returned {status}");
            let excerpt: String = body.chars().take(ERROR_BODY_EXCERPT).collect();
            return Err(ScheduleError::completion(format!(
                "API error ({status}): {excerpt}"
            )));
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ScheduleError::completion(format!("Failed to parse response: {e}")))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default();

        debug!("Received {} characters", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CompletionConfig::new("key")
            .with_model("llama-3.3-70b-versatile")
            .with_endpoint("http://localhost:9999/v1/chat/completions");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.endpoint, "http://localhost:9999/v1/chat/completions");
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.max_tokens, 1024);
    }

    #[test]
    fn test_request_wire_format() {
        let messages = vec![ChatMessage::system("be brief"), ChatMessage::user("hi")];
        let request = CompletionRequest {
            model: DEFAULT_MODEL,
            messages: messages.iter().map(WireMessage::from).collect(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama-3.1-8b-instant");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert_eq!(value["max_tokens"], 1024);
    }

    #[test]
    fn test_missing_content_is_empty() {
        let parsed: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);
        assert_eq!(content, None);
    }
}
