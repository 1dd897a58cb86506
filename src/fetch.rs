//! Cached retrieval of header texts.
//!
//! The source URLs pin a stable release branch, so a cached copy never goes
//! stale: if the cache file exists it is used as-is, otherwise the header is
//! fetched once and written through a tmp-file rename. No retries: the run
//! either has both texts or fails outright.

use std::fs;
use std::path::Path;

use tracing::debug;

/// Fetch a header text, reading from `cache_path` when it already exists.
pub async fn fetch_header(
    client: &reqwest::Client,
    url: &str,
    cache_path: &Path,
) -> Result<String, String> {
    if cache_path.exists() {
        debug!(path = %cache_path.display(), "using cached header");
        return fs::read_to_string(cache_path).map_err(|e| {
            format!(
                "Failed to read cached header {}: {e}",
                cache_path.display()
            )
        });
    }

    debug!(url, "fetching header");
    let text = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {url}: {e}"))?
        .error_for_status()
        .map_err(|e| format!("{url} returned error: {e}"))?
        .text()
        .await
        .map_err(|e| format!("Invalid response body from {url}: {e}"))?;

    if let Some(parent) = cache_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create cache directory: {e}"))?;
    }
    let temp_path = cache_path.with_extension("tmp");
    fs::write(&temp_path, &text).map_err(|e| format!("Failed to write cache file: {e}"))?;
    fs::rename(&temp_path, cache_path).map_err(|e| format!("Failed to rename cache file: {e}"))?;
    debug!(path = %cache_path.display(), bytes = text.len(), "cached header");

    Ok(text)
}
