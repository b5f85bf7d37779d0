use anyhow::Result;
use async_trait::async_trait;

use crate::feed::MemeRecord;

/// A named upstream that yields trending meme records.
///
/// Sources are best-effort: a failing source is logged and skipped by the
/// aggregator, so `fetch` should only error when the whole upstream is
/// unusable, not for individual bad items.
#[async_trait]
pub trait MemeSource: Send + Sync {
    /// Unique identifier for this source.
    fn source_id(&self) -> &'static str;

    /// Fetch a batch of records from the upstream.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream cannot be reached or decoded.
    async fn fetch(&self, http: &reqwest::Client) -> Result<Vec<MemeRecord>>;
}
