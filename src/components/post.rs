//! The feed post block: header, media, footer.

use maud::{html, Markup, Render};

use crate::components::media::{FeedImage, VideoPlayer};
use crate::feed::{MediaKind, MemeRecord};

/// One rendered feed post.
///
/// Three stacked sections: a header with the title and `@author`, a media
/// section holding exactly one of a video player or an image, and a footer
/// with the grouped upvote count and an external source link.
///
/// # Example
///
/// ```ignore
/// use crate::components::post::PostCard;
///
/// let card = PostCard::new(&record);
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub record: &'a MemeRecord,
}

impl<'a> PostCard<'a> {
    /// Create a post card for a record.
    #[must_use]
    pub const fn new(record: &'a MemeRecord) -> Self {
        Self { record }
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let record = self.record;

        html! {
            article class="meme-post" {
                header class="meme-header" {
                    h3 { (record.title) }
                    div class="meme-author" { "@" (record.author) }
                }
                div class="meme-media" {
                    @match record.media() {
                        MediaKind::Video(src) => {
                            (VideoPlayer::new(src))
                        }
                        MediaKind::Image(src) => {
                            (FeedImage::new(src).with_alt(&record.title))
                        }
                    }
                }
                footer class="meme-footer" {
                    span class="meme-ups" { "⬆️ " (format_ups(record.ups)) }
                    a class="meme-source"
                        href=(record.permalink)
                        target="_blank"
                        rel="noopener noreferrer" { "🔗 Source" }
                }
            }
        }
    }
}

/// Format an upvote count with thousands separators (e.g. `12,345`).
#[must_use]
pub fn format_ups(ups: u64) -> String {
    let digits = ups.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MemeRecord {
        MemeRecord {
            id: Some("reddit_abc".to_string()),
            title: "Cat".to_string(),
            author: "catlover".to_string(),
            url: "https://i.redd.it/a.jpg".to_string(),
            is_video: false,
            video_url: None,
            ups: 42,
            permalink: "https://www.reddit.com/r/memes/abc".to_string(),
            source: Some("Reddit".to_string()),
        }
    }

    #[test]
    fn test_format_ups() {
        assert_eq!(format_ups(0), "0");
        assert_eq!(format_ups(999), "999");
        assert_eq!(format_ups(1000), "1,000");
        assert_eq!(format_ups(12345), "12,345");
        assert_eq!(format_ups(1_234_567), "1,234,567");
    }

    #[test]
    fn test_post_card_sections() {
        let record = sample_record();
        let html = PostCard::new(&record).render().into_string();

        assert!(html.contains("meme-post"));
        assert!(html.contains("<h3>Cat</h3>"));
        assert!(html.contains("@catlover"));
        assert!(html.contains("meme-media"));
        assert!(html.contains("⬆️ 42"));
        assert!(html.contains("href=\"https://www.reddit.com/r/memes/abc\""));
        assert!(html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_post_card_image_branch() {
        let record = sample_record();
        let html = PostCard::new(&record).render().into_string();

        assert!(html.contains("<img"));
        assert!(html.contains("alt=\"Cat\""));
        assert!(!html.contains("<video"));
    }

    #[test]
    fn test_post_card_video_branch() {
        let mut record = sample_record();
        record.is_video = true;
        record.video_url = Some("https://v.redd.it/b.mp4".to_string());
        let html = PostCard::new(&record).render().into_string();

        assert!(html.contains("<video"));
        assert!(html.contains("src=\"https://v.redd.it/b.mp4\""));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_post_card_escapes_title() {
        let mut record = sample_record();
        record.title = "<script>alert(1)</script>".to_string();
        let html = PostCard::new(&record).render().into_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
