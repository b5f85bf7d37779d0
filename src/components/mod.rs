//! Maud HTML template components for the feed UI.
//!
//! This module provides reusable maud components for generating HTML.
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout and navigation
//! - `button`: Configurable button and link-button components
//! - `alert`: Alert messages
//! - `media`: Video and image display components
//! - `post`: A single feed post block (header, media, footer)
//! - `feed`: The feed container and its empty-state placeholder
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{Alert, BaseLayout, Button, FeedView};
//!
//! fn my_page(records: &[MemeRecord]) -> Markup {
//!     let content = html! {
//!         h1 { "Trending" }
//!         (Alert::info("Fresh batch loaded."))
//!         (FeedView::new(records))
//!         (Button::outline("Close").href("/"))
//!     };
//!     BaseLayout::new("Trending").render(content)
//! }
//! ```

pub mod alert;
pub mod button;
pub mod feed;
pub mod layout;
pub mod media;
pub mod post;

// Re-export layout components
pub use layout::BaseLayout;

// Re-export button components
pub use button::{Button, ButtonVariant};

// Re-export alert components
pub use alert::{Alert, AlertVariant};

// Re-export media components
pub use media::{FeedImage, VideoPlayer};

// Re-export post components
pub use post::{format_ups, PostCard};

// Re-export feed components
pub use feed::{FeedPlaceholder, FeedView, EMPTY_FEED_MESSAGE};

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
