//! Lazy cover thumbnails.
//!
//! Covers are fetched only for cards that have been rendered. Each cover is
//! decoded, shrunk to card size, and cached as PNG so later sessions skip the
//! download.

use crate::cache::cover_path;
use crate::catalog::{fetch_source_bytes, is_remote};
use anyhow::{Context, Result};
use image::ImageFormat;
use reqwest::Url;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a cover reference against the catalog it came from.
///
/// Absolute URLs and absolute paths pass through. Relative references are
/// joined onto the catalog URL, or onto the catalog file's directory.
pub fn resolve_cover_source(catalog_source: &str, cover_url: &str) -> String {
    if is_remote(cover_url) || Path::new(cover_url).is_absolute() {
        return cover_url.to_string();
    }
    if is_remote(catalog_source) {
        return Url::parse(catalog_source)
            .and_then(|base| base.join(cover_url))
            .map(|url| url.to_string())
            .unwrap_or_else(|_| cover_url.to_string());
    }
    match Path::new(catalog_source).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(cover_url).display().to_string(),
        _ => cover_url.to_string(),
    }
}

/// Produce a cached thumbnail for `source`, downloading it if needed.
pub async fn load_cover(
    source: String,
    cache_root: PathBuf,
    max_width: u32,
    max_height: u32,
) -> Result<PathBuf> {
    let target = cover_path(&cache_root, &source);
    if tokio::fs::try_exists(&target).await.unwrap_or(false) {
        debug!(source = %source, "Cover served from cache");
        return Ok(target);
    }

    let bytes = fetch_source_bytes(&source).await?;
    write_thumbnail(&bytes, &target, max_width, max_height)
        .with_context(|| format!("failed to cache cover {source}"))?;
    debug!(source = %source, path = %target.display(), "Cached cover thumbnail");
    Ok(target)
}

fn write_thumbnail(bytes: &[u8], target: &Path, max_width: u32, max_height: u32) -> Result<()> {
    let decoded = image::load_from_memory(bytes).context("cover is not a supported image")?;
    let thumb = decoded.thumbnail(max_width.max(1), max_height.max(1));
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    thumb
        .save_with_format(target, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", target.display()))
}
