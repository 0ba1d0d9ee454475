//! Engine configuration loaded from the environment.
//!
//! All values have working defaults so the engine can start with no
//! environment at all; `.env` files are honored via `dotenv`.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::AppError;

// --- Defaults ---
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CACHE_TTL_MINUTES: i64 = 30;
const DEFAULT_CACHE_CAPACITY: usize = 64;
const DEFAULT_MAX_COMMENTS: u32 = 100;
const DEFAULT_MAX_TWEETS: u32 = 100;

/// Runtime configuration for the analysis engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the remote analysis backend.
    pub api_base_url: String,
    /// Timeout applied to every backend request.
    pub request_timeout: Duration,
    /// Maximum age of a cached analysis result.
    pub cache_ttl: chrono::Duration,
    /// Maximum number of analysis results kept in the cache.
    pub cache_capacity: usize,
    /// Maximum number of YouTube comments requested per analysis.
    pub max_comments: u32,
    /// Maximum number of tweets requested per analysis.
    pub max_tweets: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            cache_ttl: chrono::Duration::minutes(DEFAULT_CACHE_TTL_MINUTES),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            max_comments: DEFAULT_MAX_COMMENTS,
            max_tweets: DEFAULT_MAX_TWEETS,
        }
    }
}

impl EngineConfig {
    /// Loads the configuration from the environment, falling back to defaults
    /// for anything unset. A malformed value is a configuration error, not a
    /// silent fallback.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let api_base_url =
            env::var("SENTISCOPE_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        // Fail early on an address nothing could ever reach.
        Url::parse(&api_base_url)
            .map_err(|e| AppError::Config(format!("SENTISCOPE_API_URL is not a valid URL: {}", e)))?;

        let request_timeout = Duration::from_secs(parse_env(
            "SENTISCOPE_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);
        let cache_ttl = chrono::Duration::minutes(parse_env(
            "SENTISCOPE_CACHE_TTL_MINUTES",
            DEFAULT_CACHE_TTL_MINUTES,
        )?);
        let cache_capacity = parse_env("SENTISCOPE_CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY)?;
        let max_comments = parse_env("SENTISCOPE_MAX_COMMENTS", DEFAULT_MAX_COMMENTS)?;
        let max_tweets = parse_env("SENTISCOPE_MAX_TWEETS", DEFAULT_MAX_TWEETS)?;

        Ok(Self {
            api_base_url,
            request_timeout,
            cache_ttl,
            cache_capacity,
            max_comments,
            max_tweets,
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| AppError::Config(format!("{} is invalid: {}", name, e))),
        Err(_) => Ok(default),
    }
}
