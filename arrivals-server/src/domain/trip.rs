//! Decoded feed records.
//!
//! These are the validated, presence-tagged forms of the protobuf wire
//! messages. Only trip updates carry data the arrivals pipeline uses;
//! every other entity kind collapses to [`Entity::Other`].

/// The root of a decoded real-time feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedMessage {
    /// Feed entities in wire order.
    pub entities: Vec<Entity>,
}

impl FeedMessage {
    /// Create a feed from its entities.
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Iterate over the trip updates in the feed, skipping other entities.
    pub fn trip_updates(&self) -> impl Iterator<Item = &TripUpdate> {
        self.entities.iter().filter_map(|e| match e {
            Entity::TripUpdate(trip) => Some(trip),
            Entity::Other => None,
        })
    }
}

/// One entity of a feed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    /// Predicted stop-by-stop timing for one trip.
    TripUpdate(TripUpdate),
    /// Vehicle positions, alerts and anything else.
    Other,
}

/// Stop-time predictions for one scheduled trip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripUpdate {
    /// Route the trip runs on (e.g. "1", "A", "GS").
    pub route_id: String,
    /// Per-stop predictions in traversal order.
    pub stop_time_updates: Vec<StopTimeUpdate>,
}

impl TripUpdate {
    /// Create a trip update.
    pub fn new(route_id: impl Into<String>, stop_time_updates: Vec<StopTimeUpdate>) -> Self {
        Self {
            route_id: route_id.into(),
            stop_time_updates,
        }
    }
}

/// A prediction for one stop within a trip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopTimeUpdate {
    /// Feed stop identifier, including the direction suffix.
    pub stop_id: String,
    /// Predicted arrival in epoch seconds. `None` means the feed gave no
    /// arrival time for this stop; `Some(0)` is a real timestamp.
    pub arrival: Option<i64>,
}

impl StopTimeUpdate {
    /// A stop with a predicted arrival.
    pub fn arriving(stop_id: impl Into<String>, arrival: i64) -> Self {
        Self {
            stop_id: stop_id.into(),
            arrival: Some(arrival),
        }
    }

    /// A stop with no arrival prediction (e.g. the origin of a trip).
    pub fn without_arrival(stop_id: impl Into<String>) -> Self {
        Self {
            stop_id: stop_id.into(),
            arrival: None,
        }
    }
}
