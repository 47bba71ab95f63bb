// src/portal/mod.rs
// Getting the page text that the extractor runs on.
pub mod client;
pub mod html;

use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

use crate::utils::error::AppError;

/// Where the result page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Visible page text already captured to a file.
    TextFile(PathBuf),
    /// Visible page text piped in on stdin.
    Stdin,
    /// Saved HTML of the result page.
    HtmlFile(PathBuf),
    /// URL of a rendered result page.
    Url(String),
}

impl PageSource {
    /// Short description used for logs and saved records.
    pub fn describe(&self) -> String {
        match self {
            PageSource::TextFile(path) => format!("text:{}", path.display()),
            PageSource::Stdin => "stdin".to_string(),
            PageSource::HtmlFile(path) => format!("html:{}", path.display()),
            PageSource::Url(url) => format!("url:{}", url),
        }
    }
}

/// Loads the visible text of the result page from `source`.
pub async fn load_page_text(source: &PageSource) -> Result<String, AppError> {
    tracing::info!("Loading result page from {}", source.describe());

    let text = match source {
        PageSource::TextFile(path) => read_file(path).await?,
        PageSource::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
        PageSource::HtmlFile(path) => html::html_to_text(&read_file(path).await?),
        PageSource::Url(url) => {
            let body = client::download_result_page(url).await?;
            if looks_like_html(&body) {
                html::html_to_text(&body)
            } else {
                body
            }
        }
    };

    tracing::debug!("Page text is {} bytes", text.len());
    Ok(text)
}

async fn read_file(path: &Path) -> Result<String, AppError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Config(format!("Cannot read '{}': {}", path.display(), e)))
}

fn looks_like_html(body: &str) -> bool {
    let head = body.trim_start().get(..512).unwrap_or(body.trim_start()).to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.contains("<html") || head.contains("<body")
}
