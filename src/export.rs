//! Download payloads and on-disk export.
//!
//! The pipeline hands plain-text code strings to whatever surface the
//! user downloads them from. This module packages a [`CodeBundle`] both
//! ways: as base64 payloads for a client-side download mechanism
//! (data URIs), and as files on disk for the CLI.

use crate::assemble::assemble_preview;
use crate::error::Result;
use crate::extract::CodeBundle;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name the assembled preview document is written under.
pub const PREVIEW_FILENAME: &str = "preview.html";

/// One downloadable code file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    /// Download file name.
    pub name: &'static str,
    /// MIME type for the data URI.
    pub mime: &'static str,
    /// Plain-text content.
    pub content: String,
}

impl DownloadFile {
    /// Content encoded with the standard base64 alphabet.
    #[must_use]
    pub fn base64(&self) -> String {
        STANDARD.encode(self.content.as_bytes())
    }

    /// `data:` URI suitable for a download link href.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64())
    }
}

/// Package a bundle as downloadable files.
///
/// `index.html` is always present; `styles.css` and `script.js` are
/// emitted only when the bundle carries them.
#[must_use]
pub fn download_files(bundle: &CodeBundle) -> Vec<DownloadFile> {
    let mut files = vec![DownloadFile {
        name: "index.html",
        mime: "text/html",
        content: bundle.html.clone(),
    }];

    if bundle.has_css() {
        files.push(DownloadFile {
            name: "styles.css",
            mime: "text/css",
            content: bundle.css.clone(),
        });
    }

    if bundle.has_javascript() {
        files.push(DownloadFile {
            name: "script.js",
            mime: "text/javascript",
            content: bundle.javascript.clone(),
        });
    }

    files
}

/// Write the bundle's files plus the assembled preview document to `dir`.
///
/// Creates the directory if needed and returns the written paths.
///
/// # Errors
///
/// Returns an IO error if the directory or any file cannot be written.
pub fn write_bundle(dir: &Path, bundle: &CodeBundle) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for file in download_files(bundle) {
        let path = dir.join(file.name);
        fs::write(&path, &file.content)?;
        debug!("wrote {} ({} bytes)", path.display(), file.content.len());
        written.push(path);
    }

    let preview = dir.join(PREVIEW_FILENAME);
    fs::write(&preview, assemble_preview(bundle))?;
    written.push(preview);

    Ok(written)
}
