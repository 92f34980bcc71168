//! Integration tests for the generation pipeline.
//!
//! These tests exercise the public API end to end with a mock client:
//! configuration → prompt → response normalization → extraction →
//! assembly → export.

use serde_json::json;
use webforge::client::MockGenerationClient;
use webforge::config::SiteConfig;
use webforge::export;
use webforge::extract::{BlockExtractor, CodeBundle};
use webforge::generator::SiteGenerator;
use webforge::prompt::PromptBuilder;
use webforge::WebforgeError;

fn generator_with(client: MockGenerationClient) -> SiteGenerator {
    SiteGenerator::new(Box::new(client))
}

// ============================================================================
// Prompt properties
// ============================================================================

#[test]
fn test_prompt_carries_supplied_values_and_defaults() {
    let config = SiteConfig::new("landing page")
        .with_colors("#111", "#10B981")
        .with_sections(2);

    let prompt = PromptBuilder::build(&config);

    assert!(prompt.contains("landing page"));
    assert!(prompt.contains("#111"));
    assert!(prompt.contains("#10B981"));
    assert!(prompt.contains("Number of Sections: 2"));
    // Untouched fields fall back to documented defaults
    assert!(prompt.contains("Font Family: Inter"));
    assert!(prompt.contains("Layout Style: Modern"));
}

// ============================================================================
// End-to-end pipeline
// ============================================================================

#[tokio::test]
async fn test_full_pipeline_html_only_response() {
    let client = MockGenerationClient::new().with_text("```html\n<p>hi</p>\n```");

    let bundle = generator_with(client)
        .generate(&SiteConfig::new("landing page"))
        .await
        .unwrap();

    assert_eq!(
        bundle,
        CodeBundle {
            html: "<p>hi</p>".to_string(),
            css: String::new(),
            javascript: String::new(),
        }
    );

    // No style or script to splice: the preview is the html unchanged
    assert_eq!(SiteGenerator::preview(&bundle), "<p>hi</p>");
}

#[tokio::test]
async fn test_full_pipeline_structured_response_with_all_blocks() {
    let response_text = "Here you go:\n\n\
        ```html\n<html><head></head><body><h1>Shop</h1></body></html>\n```\n\
        ```css\nh1 { font-family: Inter; }\n```\n\
        ```javascript\ndocument.title = 'Shop';\n```\n";
    let client = MockGenerationClient::new().with_json(json!({ "response": response_text }));

    let config = SiteConfig::new("a web shop").with_dark_mode(true);
    let bundle = generator_with(client).generate(&config).await.unwrap();

    assert_eq!(bundle.html, "<html><head></head><body><h1>Shop</h1></body></html>");
    assert_eq!(bundle.css, "h1 { font-family: Inter; }");
    assert_eq!(bundle.javascript, "document.title = 'Shop';");

    let preview = SiteGenerator::preview(&bundle);
    assert!(preview.contains("<style>h1 { font-family: Inter; }</style></head>"));
    assert!(preview.contains("<script>document.title = 'Shop';</script></body>"));
    assert_eq!(preview.matches("<style>").count(), 1);
    assert_eq!(preview.matches("<script>").count(), 1);
}

#[tokio::test]
async fn test_response_without_fenced_blocks_yields_no_bundle() {
    let client = MockGenerationClient::new()
        .with_text("I'm sorry, I can't produce a website for that request.");

    let err = generator_with(client)
        .generate(&SiteConfig::new("landing page"))
        .await
        .unwrap_err();
    assert!(matches!(err, WebforgeError::NoHtmlBlock));
}

#[tokio::test]
async fn test_css_and_js_without_html_is_still_a_failure() {
    let client = MockGenerationClient::new()
        .with_text("```css\nbody {}\n```\n```javascript\nlet a = 1;\n```");

    let err = generator_with(client)
        .generate(&SiteConfig::new("landing page"))
        .await
        .unwrap_err();
    assert!(matches!(err, WebforgeError::NoHtmlBlock));
}

#[tokio::test]
async fn test_network_failure_surfaces_with_cause() {
    let client = MockGenerationClient::new().with_error("dns lookup failed");

    let err = generator_with(client)
        .generate(&SiteConfig::new("landing page"))
        .await
        .unwrap_err();
    assert!(matches!(err, WebforgeError::Network { .. }));
    assert!(err.to_string().contains("dns lookup failed"));
}

#[tokio::test]
async fn test_blank_body_is_an_empty_response() {
    let client = MockGenerationClient::new().with_json(json!({ "response": "   " }));

    let err = generator_with(client)
        .generate(&SiteConfig::new("landing page"))
        .await
        .unwrap_err();
    assert!(matches!(err, WebforgeError::EmptyResponse));
}

// ============================================================================
// Extraction properties
// ============================================================================

#[test]
fn test_extraction_is_idempotent() {
    let text = "```html\n<p>hi</p>\n```\n```css\np {}\n```";
    assert_eq!(
        BlockExtractor::extract(text).unwrap(),
        BlockExtractor::extract(text).unwrap()
    );
}

#[test]
fn test_duplicate_tags_keep_the_last_occurrence() {
    let text = "```css\nfirst {}\n```\n```html\n<p>page</p>\n```\n```css\nsecond {}\n```";
    let bundle = BlockExtractor::extract(text).unwrap();
    assert_eq!(bundle.css, "second {}");
}

// ============================================================================
// Export handoff
// ============================================================================

#[tokio::test]
async fn test_generated_bundle_exports_and_round_trips() {
    let client = MockGenerationClient::new().with_text(
        "```html\n<body><p>hi</p></body>\n```\n```css\np { margin: 0; }\n```",
    );

    let bundle = generator_with(client)
        .generate(&SiteConfig::new("landing page"))
        .await
        .unwrap();

    let temp = tempfile::TempDir::new().unwrap();
    let written = export::write_bundle(temp.path(), &bundle).unwrap();

    // index.html + styles.css + preview.html; no script.js for an empty slot
    assert_eq!(written.len(), 3);
    let preview = std::fs::read_to_string(temp.path().join("preview.html")).unwrap();
    assert!(preview.contains("<style>p { margin: 0; }</style>"));

    for file in export::download_files(&bundle) {
        let decoded = {
            use base64::engine::general_purpose::STANDARD;
            use base64::Engine;
            STANDARD.decode(file.base64()).unwrap()
        };
        assert_eq!(String::from_utf8(decoded).unwrap(), file.content);
    }
}
