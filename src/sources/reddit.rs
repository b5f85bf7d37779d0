//! Reddit `hot` listing source.
//!
//! Pulls the hot listing of each configured subreddit and converts the
//! posts that carry displayable media into feed records.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use super::traits::MemeSource;
use crate::config::Config;
use crate::feed::MemeRecord;

/// Public site used to absolutize relative permalinks, independent of the
/// (overridable) listing base URL.
const REDDIT_SITE: &str = "https://www.reddit.com";

/// Extensions accepted for the image branch. Anything else is assumed to be
/// a thread or external link and dropped.
const MEDIA_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".mp4"];

pub struct RedditSource {
    base_url: String,
    subreddits: Vec<String>,
    posts_per_subreddit: u32,
}

impl RedditSource {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        subreddits: Vec<String>,
        posts_per_subreddit: u32,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            subreddits,
            posts_per_subreddit,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.reddit_base_url.clone(),
            config.subreddits.clone(),
            config.posts_per_subreddit,
        )
    }

    fn listing_url(&self, subreddit: &str) -> String {
        format!(
            "{}/r/{}/hot.json?limit={}",
            self.base_url, subreddit, self.posts_per_subreddit
        )
    }
}

#[async_trait]
impl MemeSource for RedditSource {
    fn source_id(&self) -> &'static str {
        "reddit"
    }

    async fn fetch(&self, http: &reqwest::Client) -> Result<Vec<MemeRecord>> {
        let mut records = Vec::new();

        // A failing subreddit never takes down the rest of the batch.
        for subreddit in &self.subreddits {
            let response = match http.get(self.listing_url(subreddit)).send().await {
                Ok(r) => r,
                Err(e) => {
                    warn!(subreddit = %subreddit, "Reddit request failed: {e}");
                    continue;
                }
            };

            if !response.status().is_success() {
                warn!(
                    subreddit = %subreddit,
                    status = %response.status(),
                    "Reddit returned non-success status"
                );
                continue;
            }

            let listing: Listing = match response.json().await {
                Ok(l) => l,
                Err(e) => {
                    warn!(subreddit = %subreddit, "Failed to decode Reddit listing: {e}");
                    continue;
                }
            };

            records.extend(
                listing
                    .data
                    .children
                    .into_iter()
                    .filter_map(|child| convert_post(child.data)),
            );
        }

        Ok(records)
    }
}

/// Convert one listing post into a feed record, or drop it.
///
/// Dropped: stickied posts, self posts, video posts without a playable URL,
/// and link posts whose URL has no recognized media extension.
fn convert_post(post: RedditPost) -> Option<MemeRecord> {
    if post.stickied || post.is_self {
        return None;
    }

    let mut url = post.url;
    let mut is_video = post.is_video;
    let mut video_url = None;

    if is_video {
        let fallback = post
            .secure_media
            .and_then(|m| m.reddit_video)
            .and_then(|v| v.fallback_url);
        match fallback {
            Some(fallback) => {
                // The listing HTML-escapes ampersands in fallback URLs.
                let playable = fallback.replace("&amp;", "&");
                url = playable.clone();
                video_url = Some(playable);
            }
            None => is_video = false,
        }
    }

    // Direct-linked clips are videos even when the listing says otherwise.
    if !is_video && (url.ends_with(".mp4") || url.ends_with(".gifv")) {
        is_video = true;
        video_url = Some(url.replace(".gifv", ".mp4"));
    }

    if !is_video && !has_media_extension(&url) {
        return None;
    }

    let permalink = if post.permalink.is_empty() {
        String::new()
    } else {
        format!("{REDDIT_SITE}{}", post.permalink)
    };

    Some(MemeRecord {
        id: Some(format!("reddit_{}", post.id)),
        title: post.title,
        author: post.author,
        url,
        is_video,
        video_url,
        ups: post.ups,
        permalink,
        source: Some("Reddit".to_string()),
    })
}

fn has_media_extension(url: &str) -> bool {
    MEDIA_EXTENSIONS.iter().any(|ext| url.ends_with(ext))
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: RedditPost,
}

#[derive(Debug, Default, Deserialize)]
struct RedditPost {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    ups: u64,
    #[serde(default)]
    url: String,
    #[serde(default)]
    is_video: bool,
    #[serde(default)]
    stickied: bool,
    #[serde(default)]
    is_self: bool,
    #[serde(default)]
    permalink: String,
    #[serde(default)]
    secure_media: Option<SecureMedia>,
}

#[derive(Debug, Deserialize)]
struct SecureMedia {
    #[serde(default)]
    reddit_video: Option<RedditVideo>,
}

#[derive(Debug, Deserialize)]
struct RedditVideo {
    #[serde(default)]
    fallback_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_post() -> RedditPost {
        RedditPost {
            id: "abc123".to_string(),
            title: "Cat".to_string(),
            author: "catlover".to_string(),
            ups: 42,
            url: "https://i.redd.it/a.jpg".to_string(),
            permalink: "/r/memes/comments/abc123/cat/".to_string(),
            ..RedditPost::default()
        }
    }

    #[test]
    fn test_convert_image_post() {
        let record = convert_post(image_post()).unwrap();
        assert_eq!(record.id.as_deref(), Some("reddit_abc123"));
        assert_eq!(record.title, "Cat");
        assert_eq!(record.author, "catlover");
        assert!(!record.is_video);
        assert_eq!(record.ups, 42);
        assert_eq!(
            record.permalink,
            "https://www.reddit.com/r/memes/comments/abc123/cat/"
        );
        assert_eq!(record.source.as_deref(), Some("Reddit"));
    }

    #[test]
    fn test_convert_skips_stickied_and_self_posts() {
        let mut post = image_post();
        post.stickied = true;
        assert!(convert_post(post).is_none());

        let mut post = image_post();
        post.is_self = true;
        assert!(convert_post(post).is_none());
    }

    #[test]
    fn test_convert_video_uses_unescaped_fallback_url() {
        let mut post = image_post();
        post.is_video = true;
        post.url = "https://v.redd.it/xyz".to_string();
        post.secure_media = Some(SecureMedia {
            reddit_video: Some(RedditVideo {
                fallback_url: Some(
                    "https://v.redd.it/xyz/DASH_720.mp4?source=fallback&amp;a=1".to_string(),
                ),
            }),
        });

        let record = convert_post(post).unwrap();
        assert!(record.is_video);
        assert_eq!(
            record.video_url.as_deref(),
            Some("https://v.redd.it/xyz/DASH_720.mp4?source=fallback&a=1")
        );
        assert_eq!(record.url, record.video_url.clone().unwrap());
    }

    #[test]
    fn test_convert_video_without_fallback_degrades_to_image_rules() {
        let mut post = image_post();
        post.is_video = true;
        post.url = "https://v.redd.it/xyz".to_string();
        // No secure_media at all: not a playable video, and the bare URL has
        // no media extension, so the post is dropped.
        assert!(convert_post(post).is_none());
    }

    #[test]
    fn test_convert_promotes_gifv_to_video() {
        let mut post = image_post();
        post.url = "https://i.imgur.com/funny.gifv".to_string();

        let record = convert_post(post).unwrap();
        assert!(record.is_video);
        assert_eq!(
            record.video_url.as_deref(),
            Some("https://i.imgur.com/funny.mp4")
        );
    }

    #[test]
    fn test_convert_drops_non_media_links() {
        let mut post = image_post();
        post.url = "https://example.com/article".to_string();
        assert!(convert_post(post).is_none());
    }

    #[test]
    fn test_listing_url() {
        let source = RedditSource::new("https://www.reddit.com", vec!["memes".to_string()], 20);
        assert_eq!(
            source.listing_url("memes"),
            "https://www.reddit.com/r/memes/hot.json?limit=20"
        );
    }
}
