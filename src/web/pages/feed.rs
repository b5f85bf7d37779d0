//! Feed page: the rendered result of a trending fetch, and its error state.

use maud::{html, Markup};

use crate::components::{Alert, BaseLayout, Button, FeedView};
use crate::feed::MemeRecord;

/// Render the feed page for a fetched batch.
///
/// One post block per record in input order, or the empty-feed placeholder;
/// the close control returns to the initial state.
#[must_use]
pub fn render_feed(records: &[MemeRecord]) -> Markup {
    let close = Button::outline("✕ Close").href("/").with_id("close-results");

    let content = html! {
        div class="feed-toolbar" {
            h1 { "Trending Memes" }
            (close)
        }
        (FeedView::new(records))
    };

    BaseLayout::new("Trending Memes").render(content)
}

/// Render the feed page's failure state: an error notification and no feed
/// container.
#[must_use]
pub fn render_feed_error(message: &str) -> Markup {
    let content = html! {
        (Alert::error(message).with_title("Fetch failed"))
        (Button::outline("Back to home").href("/"))
    };

    BaseLayout::new("Trending Memes").render(content)
}
