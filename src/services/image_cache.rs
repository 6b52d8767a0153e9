//! Download-if-absent cache for card images.
//!
//! The local file name is the final path segment of the remote image path.
//! An existing file short-circuits the network entirely (no content
//! re-validation). The body is buffered in full before anything touches the
//! disk, so a failed download never leaves a partial file behind.

use crate::models::Card;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::time::Duration;
use thiserror::Error;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from fetching or storing a card image.
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("image download from {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("remote image path {0:?} has no file name")]
    BadImagePath(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create cache directory {path}: {source}")]
    CacheDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// File cache for remote card images.
#[derive(Debug, Clone)]
pub struct ImageCache {
    base_url: String,
    cache_dir: Utf8PathBuf,
    client: reqwest::blocking::Client,
}

impl ImageCache {
    /// Create a cache rooted at `cache_dir`, downloading from `base_url`.
    ///
    /// The directory is created if it does not exist.
    pub fn new<P: AsRef<Utf8Path>>(base_url: &str, cache_dir: P) -> Result<Self, DownloadError> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir).map_err(|source| DownloadError::CacheDir {
                path: cache_dir.clone(),
                source,
            })?;
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(DownloadError::ClientBuild)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            cache_dir,
            client,
        })
    }

    /// Ensure a local copy of `remote_path` exists and return its path.
    ///
    /// Idempotent: if the file is already present, no network call is made.
    pub fn ensure_local(&self, remote_path: &str) -> Result<Utf8PathBuf, DownloadError> {
        let file_name = remote_path
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| DownloadError::BadImagePath(remote_path.to_string()))?;

        let local_path = self.cache_dir.join(file_name);
        if local_path.exists() {
            tracing::debug!("Image already cached: {}", local_path);
            return Ok(local_path);
        }

        let url = format!("{}/{}", self.base_url, remote_path.trim_start_matches('/'));
        tracing::info!("Downloading {} -> {}", url, local_path);

        // Buffer the whole body before writing; never leave a partial file.
        let bytes = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .map_err(|source| DownloadError::Request { url, source })?;

        fs::write(&local_path, &bytes).map_err(|source| DownloadError::Write {
            path: local_path.clone(),
            source,
        })?;

        Ok(local_path)
    }

    /// Pull the images for every card in the list into the cache.
    ///
    /// Front image preferred, back as fallback; imageless cards are logged
    /// and skipped. Returns the number of images now present locally.
    pub fn cache_card_images(&self, cards: &[Card]) -> Result<usize, DownloadError> {
        let mut cached = 0;
        for card in cards {
            match card.image_ref() {
                Some(image) => {
                    self.ensure_local(image)?;
                    cached += 1;
                }
                None => {
                    tracing::warn!("No image for {}", card.label());
                }
            }
        }
        Ok(cached)
    }

    /// Directory this cache writes into.
    pub fn cache_dir(&self) -> &Utf8Path {
        &self.cache_dir
    }
}
