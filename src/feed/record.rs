use serde::{Deserialize, Serialize};

/// One trending feed item.
///
/// This is the wire format of the `/api/trending-memes` endpoint and the
/// input to the feed renderer. Records are immutable display data; the
/// renderer never mutates them and enforces no uniqueness across a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemeRecord {
    /// Source-scoped identifier (e.g. `reddit_abc123`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Still-image URL; for videos this mirrors the playable URL.
    pub url: String,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Upvote count.
    #[serde(default)]
    pub ups: u64,
    /// External link to the original post.
    #[serde(default)]
    pub permalink: String,
    /// Human-readable source label (e.g. `Reddit`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Which media element a record renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind<'a> {
    Video(&'a str),
    Image(&'a str),
}

impl MemeRecord {
    /// Select the media branch for this record.
    ///
    /// A record renders as video only when `is_video` is set AND a non-empty
    /// `video_url` is present; anything else falls back to the image branch.
    #[must_use]
    pub fn media(&self) -> MediaKind<'_> {
        match &self.video_url {
            Some(video_url) if self.is_video && !video_url.is_empty() => {
                MediaKind::Video(video_url)
            }
            _ => MediaKind::Image(&self.url),
        }
    }
}
