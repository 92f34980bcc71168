//! Generation endpoint client.
//!
//! This module provides a trait-based abstraction over the remote
//! code-generation endpoint, so the pipeline can be driven by the real
//! HTTP client in production and a mock in tests.
//!
//! # Architecture
//!
//! The [`GenerationClient`] trait defines the one operation the pipeline
//! needs: send a prompt, get a raw response back. It is:
//!
//! - **Object-safe**: supports dynamic dispatch via `Box<dyn GenerationClient>`
//! - **Thread-safe**: `Send + Sync` bounds enable concurrent usage
//! - **Async-first**: the single network call is non-blocking
//!
//! The endpoint may answer with a JSON document or a plain text body;
//! both are valid and are modeled by [`RawResponse`], which owns the one
//! normalization rule turning either shape into plain text.
//!
//! # Example
//!
//! ```rust,ignore
//! use webforge::client::{GenerationClient, HttpGenerationClient};
//! use webforge::config::ApiConfig;
//!
//! let config = ApiConfig::from_env()?;
//! let client = HttpGenerationClient::new(&config)?;
//! let response = client.generate("Build me a website").await?;
//! let text = response.into_text();
//! ```

use crate::config::ApiConfig;
use crate::error::{Result, WebforgeError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::json;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::debug;

/// The one model identifier the generation endpoint currently serves.
pub const SUPPORTED_MODEL: &str = "qwen2.5-coder-14b";

/// Model identifiers advertised but not yet backed by the endpoint.
pub const COMING_SOON_MODELS: &[&str] =
    &["gpt-4-turbo", "llama-3-8b", "mistral-7b", "gemma-7b"];

/// Availability of a model identifier in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSupport {
    /// Served by the endpoint today.
    Supported,
    /// In the catalog, not yet available.
    ComingSoon,
    /// Not in the catalog at all.
    Unknown,
}

/// Look up a model identifier in the catalog.
#[must_use]
pub fn model_support(model: &str) -> ModelSupport {
    if model == SUPPORTED_MODEL {
        ModelSupport::Supported
    } else if COMING_SOON_MODELS.contains(&model) {
        ModelSupport::ComingSoon
    } else {
        ModelSupport::Unknown
    }
}

/// Raw response from the generation endpoint.
///
/// The endpoint returns either a JSON document (usually an object with a
/// `response` text field) or a raw text body. Downstream code never
/// branches on the shape: [`RawResponse::into_text`] is the single
/// normalization point.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// Body parsed as JSON.
    Json(serde_json::Value),
    /// Body returned verbatim.
    Text(String),
}

impl RawResponse {
    /// Normalize the response into plain text, trimmed.
    ///
    /// - JSON object with a string `response` field: that field
    /// - JSON string: the inner string
    /// - any other JSON value: its compact serialization
    /// - raw text: itself
    ///
    /// An object without a usable `response` field normalizes to empty
    /// text, which the orchestrator reports as an empty response.
    #[must_use]
    pub fn into_text(self) -> String {
        let text = match self {
            Self::Text(text) => text,
            Self::Json(serde_json::Value::String(inner)) => inner,
            Self::Json(serde_json::Value::Object(map)) => map
                .get("response")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            Self::Json(other) => other.to_string(),
        };
        text.trim().to_string()
    }
}

/// Abstraction over the generation endpoint.
///
/// Object-safe so the orchestrator can hold `Box<dyn GenerationClient>`
/// and tests can inject a [`MockGenerationClient`].
#[async_trait]
pub trait GenerationClient: Send + Sync + std::fmt::Debug {
    /// Send one prompt and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns a network error on transport failure (DNS, connection,
    /// timeout) or a non-success HTTP status.
    async fn generate(&self, prompt: &str) -> Result<RawResponse>;

    /// The endpoint URL this client talks to.
    fn endpoint(&self) -> &str;
}

/// HTTP client for the generation endpoint.
///
/// Issues a single `POST` with the JSON body `{"prompt": ...}` per
/// generation request. The timeout and endpoint come from [`ApiConfig`],
/// constructed once at startup and injected.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpGenerationClient {
    /// Create a client from the endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("webforge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WebforgeError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, prompt: &str) -> Result<RawResponse> {
        debug!(
            "POST {} ({} chars prompt)",
            self.endpoint,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&json!({ "prompt": prompt }))
            .send()
            .await
            .map_err(|e| {
                WebforgeError::network(format!("request to '{}' failed: {e}", self.endpoint))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebforgeError::network(format!(
                "endpoint returned {status}: {}",
                snippet(&body)
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WebforgeError::network(format!("failed to read response body: {e}")))?;

        debug!("received {} bytes", body.len());

        // Either shape is valid. Callers normalize through into_text().
        match serde_json::from_str(&body) {
            Ok(value) => Ok(RawResponse::Json(value)),
            Err(_) => Ok(RawResponse::Text(body)),
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Create a generation client for the configured model.
///
/// # Errors
///
/// Returns a configuration error for coming-soon or unknown model
/// identifiers, naming the valid option, or if the HTTP client cannot
/// be constructed.
pub fn for_model(config: &ApiConfig, model: &str) -> Result<Box<dyn GenerationClient>> {
    match model_support(model) {
        ModelSupport::Supported => Ok(Box::new(HttpGenerationClient::new(config)?)),
        ModelSupport::ComingSoon => Err(WebforgeError::config(format!(
            "model '{model}' is not yet available (coming soon). Use '{SUPPORTED_MODEL}'"
        ))),
        ModelSupport::Unknown => Err(WebforgeError::config(format!(
            "unknown model '{model}'. Valid options: {SUPPORTED_MODEL}"
        ))),
    }
}

fn snippet(body: &str) -> &str {
    let end = body
        .char_indices()
        .nth(200)
        .map_or(body.len(), |(index, _)| index);
    body[..end].trim_end()
}

/// Mock generation client for testing.
///
/// Provides controllable behavior for unit and integration tests without
/// making actual network calls. Thread-safe for use in async contexts.
///
/// # Example
///
/// ```
/// use webforge::client::MockGenerationClient;
///
/// let client = MockGenerationClient::new().with_text("canned response");
/// assert_eq!(client.call_count(), 0);
/// ```
#[derive(Debug)]
pub struct MockGenerationClient {
    /// Response to return from `generate`.
    response: RawResponse,
    /// Error to return instead (if set).
    error: Option<String>,
    /// Count of generate calls.
    call_count: AtomicU32,
}

impl Clone for MockGenerationClient {
    fn clone(&self) -> Self {
        Self {
            response: self.response.clone(),
            error: self.error.clone(),
            call_count: AtomicU32::new(self.call_count.load(Ordering::SeqCst)),
        }
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self {
            response: RawResponse::Text(String::new()),
            error: None,
            call_count: AtomicU32::new(0),
        }
    }
}

impl MockGenerationClient {
    /// Create a mock that answers with an empty text body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw text response.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.response = RawResponse::Text(text.to_string());
        self
    }

    /// Set a JSON response.
    #[must_use]
    pub fn with_json(mut self, value: serde_json::Value) -> Self {
        self.response = RawResponse::Json(value);
        self
    }

    /// Configure the mock to fail with a network error.
    #[must_use]
    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// Get the number of times `generate` was called.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, _prompt: &str) -> Result<RawResponse> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(ref error) = self.error {
            return Err(WebforgeError::network(error.clone()));
        }

        Ok(self.response.clone())
    }

    fn endpoint(&self) -> &str {
        "mock://generate"
    }
}
