/// LLM Client — the single point of entry for all calls to the local text-generation model.
///
/// ARCHITECTURAL RULE: No other module may talk to the Ollama HTTP API directly.
/// Callers depend on the `Oracle` trait so tests can swap in a stub model.
///
/// The client never retries. Retry/skip policy belongs to the caller.
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("could not connect to the model server: {0}")]
    Connectivity(String),

    #[error("model server did not respond within {} seconds", .0.as_secs())]
    Timeout(Duration),

    #[error("model server error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response from model server: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid sampling options: {0}")]
    InvalidOptions(String),
}

impl LlmError {
    /// True when the model server could not be reached at all, timeouts included.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, LlmError::Connectivity(_) | LlmError::Timeout(_))
    }
}

/// Sampling options forwarded to the model on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerateOptions {
    pub temperature: f64,
    pub top_p: f64,
    #[serde(rename = "num_predict", skip_serializing_if = "Option::is_none")]
    pub token_budget: Option<u32>,
}

impl GenerateOptions {
    pub fn new(temperature: f64, top_p: f64) -> Self {
        Self {
            temperature,
            top_p,
            token_budget: None,
        }
    }

    pub fn with_token_budget(mut self, budget: u32) -> Self {
        self.token_budget = Some(budget);
        self
    }

    fn validate(&self) -> Result<(), LlmError> {
        if !self.temperature.is_finite() {
            return Err(LlmError::InvalidOptions(format!(
                "temperature must be finite, got {}",
                self.temperature
            )));
        }
        if !self.top_p.is_finite() {
            return Err(LlmError::InvalidOptions(format!(
                "top_p must be finite, got {}",
                self.top_p
            )));
        }
        Ok(())
    }
}

/// Capability interface over the text-generation model.
///
/// Implementations return the generated text with surrounding whitespace stripped.
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a GenerateOptions,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Blocking-style (one request, one full response) client for Ollama's `/api/generate`.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn translate_transport_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout(self.timeout)
        } else {
            LlmError::Connectivity(e.to_string())
        }
    }
}

#[async_trait]
impl Oracle for OllamaClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, LlmError> {
        options.validate()?;

        let request_body = OllamaRequest {
            model,
            prompt,
            stream: false,
            options,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.translate_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.translate_transport_error(e))?;

        if !status.is_success() {
            // Ollama reports failures as {"error": "..."}
            let message = serde_json::from_str::<OllamaError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: OllamaResponse = serde_json::from_str(&body)?;

        debug!(
            "Model {} answered with {} chars",
            model,
            parsed.response.chars().count()
        );

        Ok(parsed.response.trim().to_string())
    }
}
