//! On-disk cache locations.
//!
//! Files are stored under `.cache/` using a hash of the source key as the
//! filename to avoid filesystem issues with URLs.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

pub const CACHE_DIR: &str = ".cache";

pub fn default_cache_root() -> PathBuf {
    PathBuf::from(CACHE_DIR)
}

pub fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Location of the cached thumbnail for a cover source.
pub fn cover_path(cache_root: &Path, cover_source: &str) -> PathBuf {
    cache_root
        .join("covers")
        .join(format!("{}.png", hash_key(cover_source)))
}
