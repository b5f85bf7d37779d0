//! Button component for the web UI.
//!
//! Provides a configurable button component that renders as either
//! a `<button>` or `<a>` element based on whether an href is provided.

use maud::{html, Markup, PreEscaped, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary button (default) - `.btn-primary`
    #[default]
    Primary,
    /// Outline button - `.btn.outline`
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn outline",
        }
    }
}

/// A configurable button component.
///
/// # Example
///
/// ```ignore
/// use crate::components::button::Button;
///
/// // Link-style trigger button
/// let trigger = Button::primary("View Trending Memes")
///     .href("/feed")
///     .with_id("view-trending-btn");
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    pub label: &'a str,
    pub variant: ButtonVariant,
    pub href: Option<&'a str>,
    pub id: Option<&'a str>,
    pub onclick: Option<&'a str>,
}

impl<'a> Button<'a> {
    /// Create a new button with the given variant and label.
    #[must_use]
    pub const fn new(variant: ButtonVariant, label: &'a str) -> Self {
        Self {
            label,
            variant,
            href: None,
            id: None,
            onclick: None,
        }
    }

    /// Create a primary button.
    #[must_use]
    pub const fn primary(label: &'a str) -> Self {
        Self::new(ButtonVariant::Primary, label)
    }

    /// Create an outline button.
    #[must_use]
    pub const fn outline(label: &'a str) -> Self {
        Self::new(ButtonVariant::Outline, label)
    }

    /// Render as a link to the given URL.
    #[must_use]
    pub const fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    /// Set the element id.
    #[must_use]
    pub const fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach an inline click handler.
    #[must_use]
    pub const fn with_onclick(mut self, onclick: &'a str) -> Self {
        self.onclick = Some(onclick);
        self
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let class = self.variant.class();
        let onclick = self.onclick.map(PreEscaped);

        match self.href {
            Some(href) => html! {
                a class=(class) href=(href) id=[self.id] onclick=[onclick] {
                    (self.label)
                }
            },
            None => html! {
                button class=(class) id=[self.id] onclick=[onclick] {
                    (self.label)
                }
            },
        }
    }
}
