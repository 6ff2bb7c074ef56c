//! Caching layer for the decoded feed.
//!
//! Every arrivals request needs the whole feed, whatever stop it asks
//! about. With a non-zero TTL, requests within one TTL of each other share
//! a single fetch and decode. The feed publisher only refreshes every
//! few tens of seconds, so a TTL below that adds no visible staleness.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::FeedMessage;
use crate::feed::{FeedError, FeedSource, decode_feed};

/// Configuration for the feed cache.
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// How long a decoded feed is reused. Zero disables caching.
    pub ttl: Duration,
}

impl CacheConfig {
    /// Cache decoded feeds for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl }
    }
}

/// Feed source with decoding and optional caching.
pub struct CachedFeed {
    source: Arc<dyn FeedSource>,
    /// Single-entry cache; `None` when caching is disabled.
    cache: Option<MokaCache<(), Arc<FeedMessage>>>,
}

impl CachedFeed {
    /// Wrap a feed source.
    pub fn new(source: Arc<dyn FeedSource>, config: &CacheConfig) -> Self {
        let cache = (!config.ttl.is_zero()).then(|| {
            MokaCache::builder()
                .time_to_live(config.ttl)
                .max_capacity(1)
                .build()
        });

        Self { source, cache }
    }

    /// Get the current decoded feed, fetching it if not cached.
    pub async fn current(&self) -> Result<Arc<FeedMessage>, FeedError> {
        if let Some(cache) = &self.cache
            && let Some(feed) = cache.get(&()).await
        {
            debug!("serving cached feed");
            return Ok(feed);
        }

        let bytes = self.source.fetch().await?;
        let feed = Arc::new(decode_feed(&bytes)?);
        debug!(entities = feed.entities.len(), "feed decoded");

        if let Some(cache) = &self.cache {
            cache.insert((), feed.clone()).await;
        }

        Ok(feed)
    }
}
