use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use super::record::MemeRecord;

/// Why a trending fetch failed.
///
/// Every failure collapses to one of three cases the feed page presents
/// uniformly: a non-success status, a transport error, or a body that is
/// not a JSON array of records. An empty array is not an error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("trending API returned status {0}")]
    Status(StatusCode),
    #[error("failed to reach trending API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("trending API returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A source of ordered trending records.
#[async_trait]
pub trait TrendingProvider: Send + Sync {
    /// Fetch the current trending batch, in display order.
    async fn trending(&self) -> Result<Vec<MemeRecord>, FetchError>;
}

/// Client for a remote trending-memes endpoint.
#[derive(Debug, Clone)]
pub struct TrendingApi {
    http: reqwest::Client,
    endpoint: String,
}

impl TrendingApi {
    /// Create a client for the given endpoint URL.
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TrendingProvider for TrendingApi {
    async fn trending(&self) -> Result<Vec<MemeRecord>, FetchError> {
        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // Decode by hand rather than via `Response::json` so a 200 with a
        // non-array body surfaces as `Decode`, not a transport error.
        let body = response.bytes().await?;
        let records = serde_json::from_slice(&body)?;

        Ok(records)
    }
}
