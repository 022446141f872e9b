//! One-time font acquisition, run before the server accepts requests.
use std::path::Path;
use std::time::Duration;

use anyhow::Context;

use crate::foundation::error::{StoryError, StoryResult};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of [`ensure_font`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStatus {
    /// The font file already existed; nothing was fetched.
    Present,
    /// The font was downloaded; carries the byte count written.
    Downloaded(usize),
}

/// Make sure the font file at `path` exists, downloading it from `url` if absent.
#[tracing::instrument]
pub fn ensure_font(path: &Path, url: &str) -> StoryResult<FontStatus> {
    if path.exists() {
        tracing::debug!("font already present");
        return Ok(FontStatus::Present);
    }

    tracing::info!("font missing, downloading");
    let bytes = fetch_font(url, FETCH_TIMEOUT)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create font dir '{}'", parent.display()))?;
    }

    // `path` only ever holds a complete download.
    let partial = path.with_extension("part");
    std::fs::write(&partial, &bytes)
        .with_context(|| format!("write font '{}'", partial.display()))?;
    std::fs::rename(&partial, path)
        .with_context(|| format!("move font into '{}'", path.display()))?;

    tracing::info!(bytes = bytes.len(), "font downloaded");
    Ok(FontStatus::Downloaded(bytes.len()))
}

/// GET `url` and return the body if it looks like a font payload.
pub fn fetch_font(url: &str, timeout: Duration) -> StoryResult<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("build http client")?;
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .map_err(|e| StoryError::font(format!("font download failed: {e}")))?;

    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if content_type.starts_with("text/html") {
        return Err(StoryError::font(format!(
            "font download returned an html page from {url}"
        )));
    }

    let bytes = resp.bytes().context("read font response body")?;
    if bytes.is_empty() {
        return Err(StoryError::font(format!(
            "font download returned an empty body from {url}"
        )));
    }
    Ok(bytes.to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
