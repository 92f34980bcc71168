//! Fenced code block extraction.
//!
//! Scans normalized response text for markdown code blocks tagged
//! `html`, `css`, or `javascript` and collects them into a
//! [`CodeBundle`]. An html block is the one correctness gate: a response
//! without one never yields a bundle, regardless of what else it
//! contains.

use crate::error::{Result, WebforgeError};
use anyhow::Context;
use regex::Regex;

/// The three code fragments extracted from one generation response.
///
/// `css` and `javascript` may be empty; `html` is non-empty in every
/// bundle the extractor produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBundle {
    /// HTML document body.
    pub html: String,
    /// Stylesheet, possibly empty.
    pub css: String,
    /// Script, possibly empty.
    pub javascript: String,
}

impl CodeBundle {
    /// Whether the bundle carries a stylesheet.
    #[must_use]
    pub fn has_css(&self) -> bool {
        !self.css.is_empty()
    }

    /// Whether the bundle carries a script.
    #[must_use]
    pub fn has_javascript(&self) -> bool {
        !self.javascript.is_empty()
    }
}

/// Extracts fenced code blocks from response text.
pub struct BlockExtractor;

impl BlockExtractor {
    /// Extract the html/css/javascript blocks from `text`.
    ///
    /// Matches three backticks, a language tag, a newline, the block
    /// body, a newline, three backticks. Bodies are trimmed. When a
    /// language tag appears more than once the last occurrence wins;
    /// languages that never appear leave empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`WebforgeError::NoHtmlBlock`] when no html block is
    /// present, including when the text has no fenced blocks at all.
    pub fn extract(text: &str) -> Result<CodeBundle> {
        let pattern = Regex::new(r"(?s)```(html|css|javascript)\n(.*?)\n```")
            .context("Failed to compile code block pattern")?;

        let mut bundle = CodeBundle::default();
        for captures in pattern.captures_iter(text) {
            let body = captures[2].trim().to_string();
            match &captures[1] {
                "html" => bundle.html = body,
                "css" => bundle.css = body,
                "javascript" => bundle.javascript = body,
                _ => {}
            }
        }

        if bundle.html.is_empty() {
            return Err(WebforgeError::NoHtmlBlock);
        }

        Ok(bundle)
    }
}
