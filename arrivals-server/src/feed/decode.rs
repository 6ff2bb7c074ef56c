//! Decoding of protobuf feed bytes into domain types.

use prost::Message;

use crate::domain::{Entity, FeedMessage, StopTimeUpdate, TripUpdate};

use super::error::DecodeError;
use super::proto;

/// Decode a protobuf-encoded GTFS-Realtime feed.
///
/// Decoding is all-or-nothing: either every entity is decoded or an error
/// is returned.
///
/// # Errors
///
/// Returns [`DecodeError`] if the bytes are truncated, corrupt or not a
/// `FeedMessage`.
pub fn decode_feed(bytes: &[u8]) -> Result<FeedMessage, DecodeError> {
    let wire = proto::FeedMessage::decode(bytes)?;
    Ok(convert_feed(wire))
}

/// Convert a decoded wire message into the domain feed.
fn convert_feed(wire: proto::FeedMessage) -> FeedMessage {
    let entities = wire.entity.into_iter().map(convert_entity).collect();
    FeedMessage::new(entities)
}

fn convert_entity(entity: proto::FeedEntity) -> Entity {
    match entity.trip_update {
        Some(trip) => Entity::TripUpdate(convert_trip_update(trip)),
        None => Entity::Other,
    }
}

fn convert_trip_update(trip: proto::TripUpdate) -> TripUpdate {
    let stop_time_updates = trip
        .stop_time_update
        .into_iter()
        .map(|stu| StopTimeUpdate {
            stop_id: stu.stop_id.unwrap_or_default(),
            // An arrival event without a time carries nothing to report
            arrival: stu.arrival.and_then(|event| event.time),
        })
        .collect();

    TripUpdate {
        route_id: trip.trip.route_id.unwrap_or_default(),
        stop_time_updates,
    }
}
