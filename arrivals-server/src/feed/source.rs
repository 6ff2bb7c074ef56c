//! Sources of raw feed bytes.
//!
//! The server only needs "give me the current feed bytes". The HTTP source
//! is what runs in production; the file source serves a saved snapshot for
//! offline development.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::error::FeedError;

/// Default feed: MTA subway numbered lines (1-7, S).
pub const DEFAULT_FEED_URL: &str =
    "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can produce the current feed bytes.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw protobuf bytes of the current feed.
    async fn fetch(&self) -> Result<Vec<u8>, FeedError>;
}

/// Configuration for the HTTP feed source.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// URL of the GTFS-Realtime endpoint
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl FeedConfig {
    /// Create a config for the given URL with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

/// Fetches the feed over HTTP, one attempt per call.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    http: reqwest::Client,
    url: String,
}

impl HttpFeedSource {
    /// Create a new HTTP source with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<u8>, FeedError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), "feed endpoint returned an error status");
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!(bytes = bytes.len(), "feed bytes received");
        Ok(bytes.to_vec())
    }
}

/// Serves a feed snapshot saved on disk.
///
/// The file is re-read on every fetch, so replacing it changes what the
/// server returns without a restart.
#[derive(Debug, Clone)]
pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    /// Create a source reading the given protobuf file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Vec<u8>, FeedError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FeedError::File {
                path: self.path.display().to_string(),
                source,
            })?;
        debug!(bytes = bytes.len(), "feed file read");
        Ok(bytes)
    }
}
