//! Alert components for displaying messages and notifications.

use maud::{html, Markup, Render};

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertVariant {
    /// Get the CSS class for the alert article element.
    #[must_use]
    pub const fn article_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// An alert message component.
///
/// Renders as a styled article element with success/error/warning/info styling.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::error("Failed to load trending memes. Please try again.")
///     .with_title("Fetch failed");
/// ```
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub title: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new alert with the given variant and message.
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self {
            variant,
            title: None,
            message,
        }
    }

    /// Create a success alert.
    #[must_use]
    pub const fn success(message: &'a str) -> Self {
        Self::new(AlertVariant::Success, message)
    }

    /// Create an error alert.
    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }

    /// Create a warning alert.
    #[must_use]
    pub const fn warning(message: &'a str) -> Self {
        Self::new(AlertVariant::Warning, message)
    }

    /// Create an info alert.
    #[must_use]
    pub const fn info(message: &'a str) -> Self {
        Self::new(AlertVariant::Info, message)
    }

    /// Add a title to the alert.
    #[must_use]
    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        let class = self.variant.article_class();

        html! {
            article class=(class) {
                @if let Some(title) = self.title {
                    strong { (title) }
                    " "
                }
                (self.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_error_with_title() {
        let alert = Alert::error("Something went wrong").with_title("Error");
        let html = alert.render().into_string();
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("<strong>Error</strong>"));
        assert!(html.contains("Something went wrong"));
    }

    #[test]
    fn test_alert_success() {
        let alert = Alert::success("Fresh batch loaded!");
        let html = alert.render().into_string();
        assert!(html.contains("class=\"success\""));
        assert!(html.contains("Fresh batch loaded!"));
    }

    #[test]
    fn test_alert_info() {
        let alert = Alert::info("Just so you know...");
        let html = alert.render().into_string();
        assert!(html.contains("class=\"info\""));
    }

    #[test]
    fn test_alert_warning() {
        let alert = Alert::warning("Be careful!");
        let html = alert.render().into_string();
        assert!(html.contains("class=\"warning\""));
    }
}
