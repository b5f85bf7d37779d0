use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use axum::Router;

use super::pages;
use super::AppState;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/feed", get(feed))
        .route("/api/trending-memes", get(api_trending_memes))
        .route("/healthz", get(health))
        .route("/favicon.ico", get(favicon))
}

// ========== HTML Routes ==========

async fn home() -> Response {
    Html(pages::render_home().into_string()).into_response()
}

/// Handler for the feed page (GET /feed).
///
/// This is the trigger's action: fetch the current batch from the
/// configured provider, then render the feed. On any fetch failure the
/// page carries an error notification and no feed container.
async fn feed(State(state): State<AppState>) -> Response {
    match state.provider.trending().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "Rendering trending feed");
            Html(pages::render_feed(&records).into_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch trending memes: {e}");
            let html = pages::render_feed_error("Failed to load trending memes. Please try again.");
            (StatusCode::BAD_GATEWAY, Html(html.into_string())).into_response()
        }
    }
}

// ========== JSON API Routes ==========

/// Handler for the trending memes API (GET /api/trending-memes).
///
/// Always served by the built-in aggregator; an all-sources failure yields
/// an empty array, not an error status.
async fn api_trending_memes(State(state): State<AppState>) -> Response {
    let records = state.aggregator.collect().await;
    Json(records).into_response()
}

// ========== Misc Routes ==========

async fn health() -> &'static str {
    "OK"
}

async fn favicon() -> Response {
    // Return a simple SVG favicon (fire emoji)
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text y=".9em" font-size="90">🔥</text></svg>"#;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/svg+xml")],
        svg,
    )
        .into_response()
}
