//! The feed container and its empty-state placeholder.

use maud::{html, Markup, Render};

use crate::components::post::PostCard;
use crate::feed::MemeRecord;

/// Message shown when a fetch succeeds but yields no records.
pub const EMPTY_FEED_MESSAGE: &str = "No viral content found. Try again!";

/// The rendered feed: one post block per record, in input order, or a
/// single placeholder block when the batch is empty.
///
/// Rendering is a pure function of the records; re-rendering with a new
/// batch produces a fresh document with no trace of the previous one.
#[derive(Debug, Clone)]
pub struct FeedView<'a> {
    pub records: &'a [MemeRecord],
}

impl<'a> FeedView<'a> {
    /// Create a feed view over a batch of records.
    #[must_use]
    pub const fn new(records: &'a [MemeRecord]) -> Self {
        Self { records }
    }
}

impl Render for FeedView<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="meme-feed" {
                @if self.records.is_empty() {
                    (FeedPlaceholder::new())
                } @else {
                    @for record in self.records {
                        (PostCard::new(record))
                    }
                }
            }
        }
    }
}

/// Placeholder block for an empty feed.
#[derive(Debug, Clone, Copy)]
pub struct FeedPlaceholder;

impl FeedPlaceholder {
    /// Create a new placeholder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for FeedPlaceholder {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for FeedPlaceholder {
    fn render(&self) -> Markup {
        html! {
            div class="feed-empty" { (EMPTY_FEED_MESSAGE) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> MemeRecord {
        MemeRecord {
            id: None,
            title: title.to_string(),
            author: "someone".to_string(),
            url: "https://example.com/a.jpg".to_string(),
            is_video: false,
            video_url: None,
            ups: 1,
            permalink: "https://example.com/post".to_string(),
            source: None,
        }
    }

    #[test]
    fn test_feed_view_one_post_per_record() {
        let records = vec![record("first"), record("second"), record("third")];
        let html = FeedView::new(&records).render().into_string();

        assert_eq!(html.matches("meme-post").count(), 3);
        assert!(!html.contains("feed-empty"));
    }

    #[test]
    fn test_feed_view_preserves_order() {
        let records = vec![record("first"), record("second")];
        let html = FeedView::new(&records).render().into_string();

        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_feed_view_empty_shows_placeholder() {
        let records: Vec<MemeRecord> = vec![];
        let html = FeedView::new(&records).render().into_string();

        assert_eq!(html.matches("feed-empty").count(), 1);
        assert!(html.contains(EMPTY_FEED_MESSAGE));
        assert!(!html.contains("meme-post"));
    }

    #[test]
    fn test_feed_view_renders_duplicates_separately() {
        let records = vec![record("same"), record("same")];
        let html = FeedView::new(&records).render().into_string();

        assert_eq!(html.matches("meme-post").count(), 2);
    }
}
