//! Domain types for the arrivals server.
//!
//! This module contains the decoded feed records, the derived arrival
//! predictions and the validated stop identifier. Types that carry an
//! invariant enforce it at construction time.

mod arrival;
mod stop_id;
mod trip;

pub use arrival::{ArrivalPrediction, TripArrival, minutes_until};
pub use stop_id::{InvalidStopId, StopId, is_valid, strip_direction};
pub use trip::{Entity, FeedMessage, StopTimeUpdate, TripUpdate};
