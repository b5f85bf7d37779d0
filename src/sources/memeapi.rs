//! meme-api `gimme` source.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::traits::MemeSource;
use crate::config::Config;
use crate::feed::MemeRecord;

/// Upstream titles are untrusted; cap them at a displayable length.
const TITLE_MAX_CHARS: usize = 100;

pub struct MemeApiSource {
    base_url: String,
    batch_size: u32,
}

impl MemeApiSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>, batch_size: u32) -> Self {
        Self {
            base_url: base_url.into(),
            batch_size,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.meme_api_base_url.clone(), 30)
    }

    fn gimme_url(&self) -> String {
        format!("{}/gimme/{}", self.base_url, self.batch_size)
    }
}

#[async_trait]
impl MemeSource for MemeApiSource {
    fn source_id(&self) -> &'static str {
        "meme-api"
    }

    async fn fetch(&self, http: &reqwest::Client) -> Result<Vec<MemeRecord>> {
        let response = http
            .get(self.gimme_url())
            .send()
            .await
            .context("meme-api request failed")?;

        if !response.status().is_success() {
            bail!("meme-api returned status {}", response.status());
        }

        let batch: GimmeResponse = response
            .json()
            .await
            .context("failed to decode meme-api response")?;

        Ok(batch.memes.into_iter().filter_map(convert_post).collect())
    }
}

/// Convert one meme-api post into a feed record; posts without a URL are
/// dropped.
fn convert_post(post: GimmePost) -> Option<MemeRecord> {
    if post.url.is_empty() {
        return None;
    }

    let is_video = post.url.ends_with(".mp4") || post.url.ends_with(".gif");
    let video_url = is_video.then(|| post.url.clone());

    let id = post
        .post_link
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("memeapi_{segment}"));

    Some(MemeRecord {
        id,
        title: post.title.chars().take(TITLE_MAX_CHARS).collect(),
        author: post.author,
        url: post.url,
        is_video,
        video_url,
        ups: post.ups,
        permalink: post.post_link,
        source: Some("Meme API".to_string()),
    })
}

#[derive(Debug, Deserialize)]
struct GimmeResponse {
    #[serde(default)]
    memes: Vec<GimmePost>,
}

#[derive(Debug, Default, Deserialize)]
struct GimmePost {
    #[serde(rename = "postLink", default)]
    post_link: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    ups: u64,
}
