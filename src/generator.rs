//! Generation pipeline orchestration.
//!
//! [`SiteGenerator`] sequences the stages: build the prompt, send it,
//! normalize the response, extract the code blocks. One request per
//! call, no retries, no partial results. Every stage failure surfaces
//! as a typed [`WebforgeError`] so callers can tell a configuration
//! problem from a network failure from an unusable response.
//!
//! # Example
//!
//! ```
//! use webforge::client::MockGenerationClient;
//! use webforge::config::SiteConfig;
//! use webforge::generator::SiteGenerator;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let client = MockGenerationClient::new()
//!     .with_text("```html\n<p>hi</p>\n```");
//! let generator = SiteGenerator::new(Box::new(client));
//!
//! let bundle = generator
//!     .generate(&SiteConfig::new("landing page"))
//!     .await
//!     .unwrap();
//! assert_eq!(bundle.html, "<p>hi</p>");
//! # });
//! ```

use crate::assemble::assemble_preview;
use crate::client::{self, GenerationClient};
use crate::config::{ApiConfig, SiteConfig};
use crate::error::{Result, WebforgeError};
use crate::extract::{BlockExtractor, CodeBundle};
use crate::prompt::PromptBuilder;
use tracing::{debug, error};

/// Orchestrates one website generation request end to end.
///
/// Holds a boxed [`GenerationClient`] so production code talks to the
/// configured HTTP endpoint while tests inject a mock.
pub struct SiteGenerator {
    client: Box<dyn GenerationClient>,
}

impl SiteGenerator {
    /// Create a generator around an injected client.
    #[must_use]
    pub fn new(client: Box<dyn GenerationClient>) -> Self {
        Self { client }
    }

    /// Create a generator from the process environment.
    ///
    /// Reads the endpoint configuration once and builds the client for
    /// the requested model.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint URL is missing or
    /// the model is not available.
    pub fn from_env(model: &str) -> Result<Self> {
        let api = ApiConfig::from_env()?;
        Ok(Self::new(client::for_model(&api, model)?))
    }

    /// Run the full pipeline for one configuration.
    ///
    /// # Errors
    ///
    /// Propagates the failing stage's error: network failure, an empty
    /// normalized response, or a response without an html block. A
    /// bundle is returned whole or not at all.
    pub async fn generate(&self, config: &SiteConfig) -> Result<CodeBundle> {
        let prompt = PromptBuilder::build(config);
        debug!("built prompt ({} chars)", prompt.len());

        let raw = self.client.generate(&prompt).await.map_err(|e| {
            error!("generation request failed: {e}");
            e
        })?;

        let text = raw.into_text();
        if text.is_empty() {
            error!("generation endpoint returned an empty body");
            return Err(WebforgeError::EmptyResponse);
        }
        debug!("normalized response ({} chars)", text.len());

        let bundle = BlockExtractor::extract(&text).map_err(|e| {
            error!("could not extract code blocks: {e}");
            e
        })?;

        debug!(
            "extracted bundle: html {} chars, css {} chars, js {} chars",
            bundle.html.len(),
            bundle.css.len(),
            bundle.javascript.len()
        );

        Ok(bundle)
    }

    /// Assemble the self-contained preview document for a bundle.
    #[must_use]
    pub fn preview(bundle: &CodeBundle) -> String {
        assemble_preview(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockGenerationClient;
    use serde_json::json;

    fn generator(client: MockGenerationClient) -> SiteGenerator {
        SiteGenerator::new(Box::new(client))
    }

    #[tokio::test]
    async fn test_generate_from_text_response() {
        let client = MockGenerationClient::new()
            .with_text("```html\n<h1>Hi</h1>\n```\n```css\nh1 {}\n```");

        let bundle = generator(client)
            .generate(&SiteConfig::new("a site"))
            .await
            .unwrap();

        assert_eq!(bundle.html, "<h1>Hi</h1>");
        assert_eq!(bundle.css, "h1 {}");
        assert_eq!(bundle.javascript, "");
    }

    /// The endpoint's structured shape normalizes through the same path.
    #[tokio::test]
    async fn test_generate_from_json_response() {
        let client = MockGenerationClient::new()
            .with_json(json!({ "response": "```html\n<p>hi</p>\n```" }));

        let bundle = generator(client)
            .generate(&SiteConfig::new("a site"))
            .await
            .unwrap();
        assert_eq!(bundle.html, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_generate_network_error_propagates() {
        let client = MockGenerationClient::new().with_error("connection timed out");

        let err = generator(client)
            .generate(&SiteConfig::new("a site"))
            .await
            .unwrap_err();
        assert!(matches!(err, WebforgeError::Network { .. }));
    }

    #[tokio::test]
    async fn test_generate_empty_response_fails() {
        let client = MockGenerationClient::new().with_text("   \n  ");

        let err = generator(client)
            .generate(&SiteConfig::new("a site"))
            .await
            .unwrap_err();
        assert!(matches!(err, WebforgeError::EmptyResponse));
    }

    /// A JSON object with no usable response field is an empty response.
    #[tokio::test]
    async fn test_generate_object_without_response_field_fails() {
        let client = MockGenerationClient::new().with_json(json!({ "status": "ok" }));

        let err = generator(client)
            .generate(&SiteConfig::new("a site"))
            .await
            .unwrap_err();
        assert!(matches!(err, WebforgeError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_generate_no_code_blocks_fails() {
        let client = MockGenerationClient::new().with_text("I could not generate a website.");

        let err = generator(client)
            .generate(&SiteConfig::new("a site"))
            .await
            .unwrap_err();
        assert!(matches!(err, WebforgeError::NoHtmlBlock));
    }

    #[test]
    fn test_preview_delegates_to_assembler() {
        let bundle = CodeBundle {
            html: "<p>hi</p>".to_string(),
            css: String::new(),
            javascript: String::new(),
        };
        assert_eq!(SiteGenerator::preview(&bundle), "<p>hi</p>");
    }
}
