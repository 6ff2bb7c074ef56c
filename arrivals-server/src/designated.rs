//! The server's designated stop.
//!
//! Clients that cannot pass a stop id (a fixed display, say) ask for "the
//! default stop". Which stop that is can be changed at runtime, so it lives
//! behind a lock shared by all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{InvalidStopId, StopId};

/// Thread-safe holder of the designated stop.
///
/// Cloning shares the underlying value. Readers get a snapshot and release
/// the lock immediately, so no lock is held while the feed is fetched.
#[derive(Clone)]
pub struct DesignatedStop {
    inner: Arc<RwLock<StopId>>,
}

impl DesignatedStop {
    /// Create a holder seeded with `initial`.
    pub fn new(initial: StopId) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Get the current designated stop.
    pub async fn get(&self) -> StopId {
        self.inner.read().await.clone()
    }

    /// Replace the designated stop.
    ///
    /// The candidate is validated before the lock is taken. On failure the
    /// current value is left unchanged.
    pub async fn set(&self, candidate: &str) -> Result<StopId, InvalidStopId> {
        let stop = StopId::parse(candidate)?;

        let mut guard = self.inner.write().await;
        *guard = stop.clone();

        Ok(stop)
    }
}
