//! Webforge - AI Website Generation
//!
//! Collects website-design parameters, sends a templated prompt to a
//! remote code-generation endpoint, extracts the returned
//! HTML/CSS/JavaScript from fenced markdown blocks, and assembles a
//! self-contained preview document plus downloadable files.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - Site parameters and endpoint configuration
//! - [`prompt`] - Instruction prompt construction
//! - [`client`] - Generation endpoint client (HTTP + mock)
//! - [`extract`] - Fenced code block extraction
//! - [`assemble`] - Preview document assembly
//! - [`export`] - Download payloads and on-disk export
//! - [`generator`] - Pipeline orchestration
//! - [`error`] - Custom error types and handling
//!
//! # Example
//!
//! ```rust,ignore
//! use webforge::config::SiteConfig;
//! use webforge::export;
//! use webforge::generator::SiteGenerator;
//!
//! let config = SiteConfig::new("landing page for a SaaS product")
//!     .with_colors("#4F46E5", "#10B981")
//!     .with_sections(4);
//!
//! let generator = SiteGenerator::from_env(&config.model)?;
//! let bundle = generator.generate(&config).await?;
//!
//! export::write_bundle("site".as_ref(), &bundle)?;
//! let preview = SiteGenerator::preview(&bundle);
//! ```

pub mod assemble;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod generator;
pub mod prompt;

// Re-export commonly used types
pub use error::{Result, WebforgeError};

pub use assemble::assemble_preview;
pub use client::{
    GenerationClient, HttpGenerationClient, MockGenerationClient, ModelSupport, RawResponse,
    SUPPORTED_MODEL,
};
pub use config::{ApiConfig, SiteConfig, DEFAULT_TIMEOUT_SECS, ENDPOINT_ENV, TIMEOUT_ENV};
pub use export::{download_files, write_bundle, DownloadFile};
pub use extract::{BlockExtractor, CodeBundle};
pub use generator::SiteGenerator;
pub use prompt::PromptBuilder;
