//! Home page: the initial state with hero cards and the trigger control.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button};

/// Reveal the loading indicator when the trigger is activated. The
/// indicator lives only until the navigation completes, so it cannot
/// outlast the attempt, success or failure.
const SHOW_LOADING_JS: &str = "document.getElementById('loading').classList.remove('hidden');";

/// Render the home page.
///
/// The hero blocks carry the `card`/`hero-card` classes the tilt script
/// attaches to; the loading indicator starts hidden and is revealed by the
/// trigger's click handler.
#[must_use]
pub fn render_home() -> Markup {
    let trigger = Button::primary("🔥 View Trending Memes")
        .href("/feed")
        .with_id("view-trending-btn")
        .with_onclick(SHOW_LOADING_JS);

    let content = html! {
        section class="hero" {
            div class="hero-card card" {
                h1 { "MemeMaster" }
                p { "The freshest viral memes, pulled straight from the internet's front pages." }
                (trigger)
            }
            div class="card" {
                h3 { "How it works" }
                p {
                    "One click pulls the hottest posts from Reddit and the Meme API, "
                    "shuffles them, and serves the top picks as a scrollable feed."
                }
            }
        }
        div id="loading" class="loading hidden" { "Loading trending memes…" }
    };

    BaseLayout::new("Home").render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_structure() {
        let html = render_home().into_string();

        assert!(html.contains("<title>Home - MemeMaster</title>"));
        assert!(html.contains("hero-card card"));
        assert!(html.contains("<h1>MemeMaster</h1>"));
    }

    #[test]
    fn test_home_page_trigger() {
        let html = render_home().into_string();

        assert!(html.contains("id=\"view-trending-btn\""));
        assert!(html.contains("href=\"/feed\""));
        assert!(html.contains("getElementById('loading')"));
    }

    #[test]
    fn test_home_page_loading_indicator_starts_hidden() {
        let html = render_home().into_string();

        assert!(html.contains("id=\"loading\""));
        assert!(html.contains("class=\"loading hidden\""));
    }
}
