//! Media display components for video and image content.
//!
//! This module provides the two media elements a feed post can carry: an
//! inline-playable video player and a lazily loaded image.

use maud::{html, Markup, PreEscaped, Render};

/// Inline handler that hides a broken image instead of leaving the
/// browser's broken-image glyph in the feed. The element stays in the
/// document; only its display is cleared.
const HIDE_ON_ERROR_JS: &str = "this.style.display='none';";

/// Video player component for feed posts.
///
/// Renders a looping, muted, inline-playable video with controls, so a feed
/// full of clips never autoplays sound.
#[derive(Debug, Clone)]
pub struct VideoPlayer<'a> {
    /// Source URL for the video
    pub src: &'a str,
    /// Optional MIME type for the video source
    pub content_type: Option<&'a str>,
}

impl<'a> VideoPlayer<'a> {
    /// Create a new video player.
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            content_type: None,
        }
    }

    /// Set the content type (MIME type) for the video.
    #[must_use]
    pub fn with_content_type(mut self, content_type: &'a str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Infer the video MIME type from the source URL extension.
    fn inferred_type(&self) -> &'static str {
        let path = self.src.split('?').next().unwrap_or(self.src);
        let extension = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match extension.as_str() {
            "webm" => "video/webm",
            "mov" => "video/quicktime",
            "ogv" => "video/ogg",
            _ => "video/mp4", // default
        }
    }
}

impl Render for VideoPlayer<'_> {
    fn render(&self) -> Markup {
        let video_type = self.content_type.unwrap_or_else(|| self.inferred_type());

        html! {
            video controls loop muted playsinline preload="metadata" {
                source src=(self.src) type=(video_type);
                "Your browser does not support the video tag."
            }
        }
    }
}

/// Image component for feed posts.
///
/// Lazily loaded, with alt text from the post title. A load failure hides
/// the element rather than removing it, so the rest of the post keeps its
/// layout.
#[derive(Debug, Clone)]
pub struct FeedImage<'a> {
    /// Source URL for the image
    pub src: &'a str,
    /// Optional alt text
    pub alt: Option<&'a str>,
    /// Whether to use lazy loading
    pub lazy: bool,
}

impl<'a> FeedImage<'a> {
    /// Create a new feed image.
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            alt: None,
            lazy: true,
        }
    }

    /// Set the alt text for the image.
    #[must_use]
    pub fn with_alt(mut self, alt: &'a str) -> Self {
        self.alt = Some(alt);
        self
    }

    /// Enable or disable lazy loading.
    #[must_use]
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }
}

impl Render for FeedImage<'_> {
    fn render(&self) -> Markup {
        let alt_text = self.alt.unwrap_or("");
        let loading = if self.lazy { Some("lazy") } else { None };

        html! {
            img src=(self.src)
                alt=(alt_text)
                loading=[loading]
                onerror=(PreEscaped(HIDE_ON_ERROR_JS));
        }
    }
}
