//! Upstream meme sources and the aggregator that merges them.
//!
//! Each upstream implements [`MemeSource`]; the [`Aggregator`] fetches all
//! registered sources concurrently, merges their batches, optionally
//! shuffles the result, and caps it at the configured feed limit. It backs
//! both the `/api/trending-memes` endpoint and (by default) the feed page.

pub mod memeapi;
pub mod reddit;
pub mod traits;

pub use memeapi::MemeApiSource;
pub use reddit::RedditSource;
pub use traits::MemeSource;

use async_trait::async_trait;
use futures_util::future::join_all;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::config::Config;
use crate::feed::{FetchError, MemeRecord, TrendingProvider};

/// Registry of meme sources plus merge policy.
pub struct Aggregator {
    http: reqwest::Client,
    sources: Vec<Box<dyn MemeSource>>,
    limit: usize,
    shuffle: bool,
}

impl Aggregator {
    /// Create an empty aggregator.
    #[must_use]
    pub fn new(http: reqwest::Client, limit: usize, shuffle: bool) -> Self {
        Self {
            http,
            sources: Vec::new(),
            limit,
            shuffle,
        }
    }

    /// Create an aggregator with the standard sources from configuration.
    #[must_use]
    pub fn from_config(config: &Config, http: reqwest::Client) -> Self {
        let mut aggregator = Self::new(http, config.feed_limit, config.shuffle_feed);
        aggregator.register(Box::new(RedditSource::from_config(config)));
        aggregator.register(Box::new(MemeApiSource::from_config(config)));
        aggregator
    }

    /// Register a source.
    pub fn register(&mut self, source: Box<dyn MemeSource>) {
        self.sources.push(source);
    }

    /// Get all registered sources.
    #[must_use]
    pub fn sources(&self) -> &[Box<dyn MemeSource>] {
        &self.sources
    }

    /// Fetch every source and merge the results.
    ///
    /// A failed source contributes nothing; it never aborts the others.
    /// The merged batch is shuffled (when enabled) and truncated to the
    /// feed limit. An all-sources failure yields an empty batch.
    pub async fn collect(&self) -> Vec<MemeRecord> {
        let fetches = self.sources.iter().map(|source| {
            let http = &self.http;
            async move { (source.source_id(), source.fetch(http).await) }
        });

        let mut records = Vec::new();
        for (source_id, result) in join_all(fetches).await {
            match result {
                Ok(batch) => {
                    debug!(source = source_id, count = batch.len(), "Source returned records");
                    records.extend(batch);
                }
                Err(e) => {
                    warn!(source = source_id, "Source fetch failed: {e:#}");
                }
            }
        }

        if self.shuffle {
            records.shuffle(&mut rand::thread_rng());
        }
        records.truncate(self.limit);
        records
    }
}

#[async_trait]
impl TrendingProvider for Aggregator {
    async fn trending(&self) -> Result<Vec<MemeRecord>, FetchError> {
        Ok(self.collect().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};

    struct StaticSource {
        id: &'static str,
        titles: Vec<&'static str>,
    }

    #[async_trait]
    impl MemeSource for StaticSource {
        fn source_id(&self) -> &'static str {
            self.id
        }

        async fn fetch(&self, _http: &reqwest::Client) -> Result<Vec<MemeRecord>> {
            Ok(self
                .titles
                .iter()
                .map(|title| MemeRecord {
                    id: None,
                    title: (*title).to_string(),
                    author: "someone".to_string(),
                    url: "https://example.com/a.jpg".to_string(),
                    is_video: false,
                    video_url: None,
                    ups: 1,
                    permalink: "https://example.com/post".to_string(),
                    source: Some(self.id.to_string()),
                })
                .collect())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl MemeSource for FailingSource {
        fn source_id(&self) -> &'static str {
            "failing"
        }

        async fn fetch(&self, _http: &reqwest::Client) -> Result<Vec<MemeRecord>> {
            Err(anyhow!("upstream exploded"))
        }
    }

    #[tokio::test]
    async fn test_collect_merges_sources_in_registration_order() {
        let mut aggregator = Aggregator::new(reqwest::Client::new(), 50, false);
        aggregator.register(Box::new(StaticSource {
            id: "first",
            titles: vec!["a", "b"],
        }));
        aggregator.register(Box::new(StaticSource {
            id: "second",
            titles: vec!["c"],
        }));

        let records = aggregator.collect().await;
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_collect_survives_failing_source() {
        let mut aggregator = Aggregator::new(reqwest::Client::new(), 50, false);
        aggregator.register(Box::new(FailingSource));
        aggregator.register(Box::new(StaticSource {
            id: "healthy",
            titles: vec!["a"],
        }));

        let records = aggregator.collect().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "a");
    }

    #[tokio::test]
    async fn test_collect_truncates_to_limit() {
        let mut aggregator = Aggregator::new(reqwest::Client::new(), 2, false);
        aggregator.register(Box::new(StaticSource {
            id: "many",
            titles: vec!["a", "b", "c", "d"],
        }));

        let records = aggregator.collect().await;
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_trending_never_errors() {
        let aggregator = Aggregator::new(reqwest::Client::new(), 10, true);
        let records = aggregator.trending().await.unwrap();
        assert!(records.is_empty());
    }
}
