//! Web server: shared state, router assembly, static file serving.

pub mod pages;
pub mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::feed::{TrendingApi, TrendingProvider};
use crate::sources::Aggregator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Built-in aggregation, always available for `/api/trending-memes`.
    pub aggregator: Arc<Aggregator>,
    /// What the feed page fetches from: the external trending API when one
    /// is configured, the aggregator otherwise.
    pub provider: Arc<dyn TrendingProvider>,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// One outbound HTTP client (with the configured timeout and user
    /// agent) is shared by the aggregator and, when configured, the remote
    /// trending API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        let aggregator = Arc::new(Aggregator::from_config(&config, http.clone()));
        let provider: Arc<dyn TrendingProvider> = match &config.trending_api_url {
            Some(api_url) => Arc::new(TrendingApi::new(http, api_url.clone())),
            None => aggregator.clone(),
        };

        Ok(Self {
            config: Arc::new(config),
            aggregator,
            provider,
        })
    }
}

/// Start the web server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let state = AppState::from_config(config)?;
    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app).await.context("Web server error")?;

    Ok(())
}

/// Create the main application router.
#[must_use]
pub fn create_app(state: AppState) -> Router {
    // Determine static files directory
    let static_dir = find_static_dir();
    info!(static_dir = ?static_dir, "Serving static files");

    Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. ./static (development)
/// 2. /usr/share/mememaster/static (installed)
/// 3. Falls back to ./static
fn find_static_dir() -> PathBuf {
    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/mememaster/static"),
    ];

    for path in &candidates {
        if path.exists() && path.is_dir() {
            return path.clone();
        }
    }

    // Default fallback
    PathBuf::from("./static")
}
