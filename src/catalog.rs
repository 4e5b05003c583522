//! Book catalog loading.
//!
//! The catalog is a static JSON document of the form `{ "books": [...] }`.
//! It is read once at startup, either from a local path or with a plain
//! HTTP GET when the source is an `http(s)://` URL.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// One catalog record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_url: String,
    pub published_date: String,
    pub page_count: u32,
    pub read_link: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    books: Vec<Book>,
}

pub(crate) fn is_remote(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Read raw bytes from a local path or an HTTP(S) URL.
pub(crate) async fn fetch_source_bytes(source: &str) -> Result<Vec<u8>> {
    if is_remote(source) {
        let response = reqwest::get(source)
            .await
            .with_context(|| format!("request to {source} failed"))?
            .error_for_status()
            .with_context(|| format!("{source} returned an error status"))?;
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("failed to read body from {source}"))?;
        Ok(bytes.to_vec())
    } else {
        tokio::fs::read(source)
            .await
            .with_context(|| format!("failed to read {source}"))
    }
}

/// Parse a catalog document, preserving source order.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Book>> {
    let file: CatalogFile =
        serde_json::from_slice(bytes).context("catalog is not a valid books document")?;
    Ok(file.books)
}

/// Fetch and parse the catalog once.
pub async fn load_books(source: &str) -> Result<Vec<Book>> {
    let bytes = fetch_source_bytes(source).await?;
    let books = parse_catalog(&bytes)?;
    debug!(source, count = books.len(), "Parsed catalog");
    Ok(books)
}

/// Fetch the catalog, retrying `retries` extra times with a doubling backoff.
pub async fn load_books_with_retry(
    source: String,
    retries: u32,
    backoff: Duration,
) -> Result<Vec<Book>> {
    let mut delay = backoff;
    let mut last_err = None;
    for attempt in 0..=retries {
        if attempt > 0 {
            tokio::time::sleep(delay).await;
            delay = delay.saturating_mul(2);
        }
        match load_books(&source).await {
            Ok(books) => {
                info!(source = %source, attempt, count = books.len(), "Loaded catalog");
                return Ok(books);
            }
            Err(err) => {
                if attempt < retries {
                    warn!(source = %source, attempt, "Catalog load failed, retrying: {err:#}");
                }
                last_err = Some(err);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| anyhow!("catalog load made no attempts")))
}
