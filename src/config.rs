use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Trending Feed
    /// External trending-memes endpoint. When unset, the built-in
    /// aggregator backs the feed page directly.
    pub trending_api_url: Option<String>,
    pub fetch_timeout: Duration,
    pub feed_limit: usize,
    pub shuffle_feed: bool,

    // Upstream Sources
    pub subreddits: Vec<String>,
    pub posts_per_subreddit: u32,
    pub reddit_base_url: String,
    pub meme_api_base_url: String,
    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable has an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,

            // Trending Feed
            trending_api_url: optional_env("TRENDING_API_URL"),
            fetch_timeout: Duration::from_secs(parse_env_u64("FETCH_TIMEOUT_SECS", 10)?),
            feed_limit: parse_env_usize("FEED_LIMIT", 50)?,
            shuffle_feed: parse_env_bool("SHUFFLE_FEED", true)?,

            // Upstream Sources
            subreddits: parse_list(&env_or_default(
                "SUBREDDITS",
                "memes,dankmemes,funny,wholesomememes",
            )),
            posts_per_subreddit: parse_env_u32("POSTS_PER_SUBREDDIT", 20)?,
            reddit_base_url: env_or_default("REDDIT_BASE_URL", "https://www.reddit.com"),
            meme_api_base_url: env_or_default("MEME_API_BASE_URL", "https://meme-api.com"),
            user_agent: env_or_default("HTTP_USER_AGENT", "mememaster/0.1"),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed_limit == 0 {
            return Err(ConfigError::InvalidValue {
                name: "FEED_LIMIT".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.subreddits.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "SUBREDDITS".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "FETCH_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(api_url) = &self.trending_api_url {
            let parsed = url::Url::parse(api_url).map_err(|e| ConfigError::InvalidValue {
                name: "TRENDING_API_URL".to_string(),
                message: e.to_string(),
            })?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(ConfigError::InvalidValue {
                    name: "TRENDING_API_URL".to_string(),
                    message: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
        }
        Ok(())
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::ParseBool {
                name: name.to_string(),
                value: val,
            }),
        },
        _ => Ok(default),
    }
}
