//! Configuration types for site generation.
//!
//! Two kinds of configuration live here:
//!
//! - [`SiteConfig`] describes the website a user wants, one record per
//!   generation request. Every field except the description has a
//!   documented default, applied both by serde and by the builder.
//! - [`ApiConfig`] is the static endpoint configuration (URL + timeout),
//!   read once from the process environment at startup and injected into
//!   the client. It is never read ambiently at call time, so tests can
//!   point the pipeline at a fake endpoint.

use crate::error::{Result, WebforgeError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the generation endpoint URL. Required.
pub const ENDPOINT_ENV: &str = "WEBFORGE_API_URL";

/// Environment variable holding the request timeout in seconds. Optional.
pub const TIMEOUT_ENV: &str = "WEBFORGE_API_TIMEOUT";

/// Default request timeout when [`TIMEOUT_ENV`] is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

fn default_primary_color() -> String {
    "#4F46E5".to_string()
}

fn default_secondary_color() -> String {
    "#10B981".to_string()
}

fn default_font_family() -> String {
    "Inter".to_string()
}

fn default_layout_style() -> String {
    "Modern".to_string()
}

fn default_num_sections() -> u8 {
    3
}

fn default_model() -> String {
    crate::client::SUPPORTED_MODEL.to_string()
}

/// Design parameters for one website generation request.
///
/// Immutable once submitted to the pipeline. Deserializes from partial
/// JSON with documented defaults for every optional field.
///
/// # Example
///
/// ```
/// use webforge::config::SiteConfig;
///
/// let config = SiteConfig::new("landing page for a coffee roaster")
///     .with_colors("#111111", "#D97706")
///     .with_sections(4);
///
/// assert_eq!(config.font_family, "Inter");
/// assert_eq!(config.num_sections, 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// What the website should be (content brief). Required.
    pub description: String,

    /// Primary color as a hex string. Default `#4F46E5`.
    #[serde(default = "default_primary_color")]
    pub primary_color: String,

    /// Secondary color as a hex string. Default `#10B981`.
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,

    /// Font family name. Default `Inter`.
    ///
    /// Known values: Inter, Roboto, Open Sans, Montserrat, Poppins,
    /// Nunito. Free-form names are accepted, the list is advisory.
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Layout style. Default `Modern`.
    ///
    /// Known values: Modern, Minimalist, Corporate, Creative, Elegant,
    /// Bold.
    #[serde(default = "default_layout_style")]
    pub layout_style: String,

    /// Whether the generated site should include animations.
    #[serde(default)]
    pub include_animation: bool,

    /// Whether the generated site should support dark mode.
    #[serde(default)]
    pub dark_mode: bool,

    /// Number of page sections, meaningful range 1-6. Default 3.
    #[serde(default = "default_num_sections")]
    pub num_sections: u8,

    /// Generation model identifier. Selects the client, not prompt content.
    #[serde(default = "default_model")]
    pub model: String,
}

impl SiteConfig {
    /// Create a configuration with the given description and defaults
    /// for everything else.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            font_family: default_font_family(),
            layout_style: default_layout_style(),
            include_animation: false,
            dark_mode: false,
            num_sections: default_num_sections(),
            model: default_model(),
        }
    }

    /// Set the primary and secondary colors.
    #[must_use]
    pub fn with_colors(
        mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        self.primary_color = primary.into();
        self.secondary_color = secondary.into();
        self
    }

    /// Set the font family.
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font_family = font.into();
        self
    }

    /// Set the layout style.
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout_style = layout.into();
        self
    }

    /// Enable or disable animations.
    #[must_use]
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.include_animation = enabled;
        self
    }

    /// Enable or disable dark mode support.
    #[must_use]
    pub fn with_dark_mode(mut self, enabled: bool) -> Self {
        self.dark_mode = enabled;
        self
    }

    /// Set the number of page sections.
    #[must_use]
    pub fn with_sections(mut self, sections: u8) -> Self {
        self.num_sections = sections;
        self
    }

    /// Set the generation model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Static endpoint configuration for the generation client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Generation endpoint URL.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration with the default timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the endpoint configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if [`ENDPOINT_ENV`] is unset, or if
    /// [`TIMEOUT_ENV`] is set but not a whole number of seconds. A
    /// missing endpoint is fatal: no request is ever attempted without
    /// one.
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var(ENDPOINT_ENV).map_err(|_| {
            WebforgeError::config(format!(
                "{ENDPOINT_ENV} is not set - the generation endpoint URL is required"
            ))
        })?;

        let timeout = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    WebforgeError::config(format!(
                        "{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { endpoint, timeout })
    }
}
