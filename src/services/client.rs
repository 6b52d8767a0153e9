//! Blocking HTTP client for the ArkhamDB public API.
//!
//! Endpoints consumed (all GET, all JSON):
//! - `api/public/card/{id}` - single card
//! - `api/public/cards/{pack_code}` - all cards in a pack
//! - `api/public/decklist/{deck_id}.json` - a published decklist
//!
//! A failed fetch aborts the whole run; there is no per-item retry.

use crate::models::{Card, Deck};
use std::time::Duration;
use thiserror::Error;

/// Default API base URL.
pub const ARKHAMDB_BASE_URL: &str = "https://arkhamdb.com/";

/// Per-request timeout. A hung remote call would otherwise hang the run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the card database API.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed response body from {url}: {source}")]
    MalformedBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Source of card, pack, and deck records.
///
/// Abstracts [`ArkhamDbClient`] so the import orchestration can run against
/// a stub in tests.
pub trait CardSource {
    fn fetch_card(&self, id: &str) -> Result<Card, FetchError>;
    fn fetch_pack(&self, pack_code: &str) -> Result<Vec<Card>, FetchError>;
    fn fetch_deck(&self, deck_id: &str) -> Result<Deck, FetchError>;
}

/// Blocking client for the ArkhamDB public API.
#[derive(Debug, Clone)]
pub struct ArkhamDbClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ArkhamDbClient {
    /// Create a client against the given API base URL (trailing slash optional).
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        response
            .json()
            .map_err(|source| FetchError::MalformedBody { url, source })
    }
}

impl CardSource for ArkhamDbClient {
    fn fetch_card(&self, id: &str) -> Result<Card, FetchError> {
        self.get_json(&format!("api/public/card/{}", id))
    }

    fn fetch_pack(&self, pack_code: &str) -> Result<Vec<Card>, FetchError> {
        self.get_json(&format!("api/public/cards/{}", pack_code))
    }

    fn fetch_deck(&self, deck_id: &str) -> Result<Deck, FetchError> {
        self.get_json(&format!("api/public/decklist/{}.json", deck_id))
    }
}
