//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, navigation, and footer.

use maud::{html, Markup, DOCTYPE};

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub const fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="dark";
                    title { (self.title) " - MemeMaster" }

                    link rel="stylesheet" href="/static/css/style.css";
                    link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔥</text></svg>";
                }
                body {
                    (Self::render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                    // External script for the card tilt effect
                    script src="/static/js/tilt.js" {}
                }
            }
        }
    }

    /// Render the page header with navigation.
    fn render_header() -> Markup {
        html! {
            header class="container" {
                nav {
                    ul {
                        li {
                            a href="/" {
                                strong class="site-logo" { "MemeMaster" }
                            }
                        }
                    }
                    ul {
                        li { a href="/" { "Home" } }
                        li { a href="/feed" { "Trending" } }
                    }
                }
            }
        }
    }

    /// Render the page footer.
    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small {
                    "MemeMaster | Trending memes from around the web | "
                    a href="/api/trending-memes" { "JSON API" }
                }
            }
        }
    }
}
