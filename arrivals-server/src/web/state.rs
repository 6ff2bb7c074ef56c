//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedFeed;
use crate::designated::DesignatedStop;
use crate::stations::StationNames;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Feed source with decoding and caching
    pub feed: Arc<CachedFeed>,

    /// Stop id → station name lookup
    pub station_names: Arc<StationNames>,

    /// Stop served by `/train/getStop`
    pub designated: DesignatedStop,
}

impl AppState {
    /// Create a new app state.
    pub fn new(feed: CachedFeed, station_names: StationNames, designated: DesignatedStop) -> Self {
        Self {
            feed: Arc::new(feed),
            station_names: Arc::new(station_names),
            designated,
        }
    }
}
