//! Server configuration.
//!
//! Read from environment variables at startup. Every setting has a default
//! so the server starts with no configuration at all.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::domain::{InvalidStopId, StopId};
use crate::feed::{DEFAULT_FEED_URL, FeedConfig};

/// Stop served by `/train/getStop` until changed (Times Sq-42 St, uptown).
const DEFAULT_STOP: &str = "127N";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    /// The default stop does not pass validation
    #[error("invalid DEFAULT_STOP: {0}")]
    InvalidDefaultStop(#[from] InvalidStopId),
}

/// Configuration for the whole server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Upstream feed endpoint and timeout
    pub feed: FeedConfig,
    /// Serve this local feed file instead of fetching over HTTP
    pub feed_file: Option<PathBuf>,
    /// Decoded feed cache settings
    pub cache: CacheConfig,
    /// Station table CSV
    pub stations_csv: PathBuf,
    /// Initial designated stop
    pub default_stop: StopId,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("BIND_ADDR") {
            Some(value) => parse_value("BIND_ADDR", value)?,
            None => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        let timeout_secs: u64 = match get("FEED_TIMEOUT_SECS") {
            Some(value) => parse_value("FEED_TIMEOUT_SECS", value)?,
            None => 10,
        };

        let cache_ttl_secs: u64 = match get("FEED_CACHE_TTL_SECS") {
            Some(value) => parse_value("FEED_CACHE_TTL_SECS", value)?,
            None => 0,
        };

        let default_stop = get("DEFAULT_STOP").unwrap_or_else(|| DEFAULT_STOP.to_string());
        let default_stop = StopId::parse(&default_stop)?;

        Ok(Self {
            bind_addr,
            feed: FeedConfig::new(get("FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string()))
                .with_timeout(Duration::from_secs(timeout_secs)),
            feed_file: get("FEED_FILE").map(PathBuf::from),
            cache: CacheConfig::with_ttl(Duration::from_secs(cache_ttl_secs)),
            stations_csv: get("STATIONS_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("stations.csv")),
            default_stop,
        })
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
