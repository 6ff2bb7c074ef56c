//! Arrival projection.
//!
//! This module contains the core logic for turning a decoded feed into the
//! list of upcoming trains at one stop: per-trip extraction of the arrival
//! and heading, then filtering, naming and ordering across trips.

use crate::domain::{
    ArrivalPrediction, FeedMessage, TripArrival, TripUpdate, minutes_until, strip_direction,
};
use crate::stations::StationNames;

/// Trains further in the past than this many minutes are dropped.
const RECENCY_CUTOFF_MINS: i64 = -2;

/// Find a trip's predicted arrival at `stop_id` and where it heads next.
///
/// Scans the trip's stops in order. A stop matching `stop_id` with an
/// arrival time records that time (a later match overwrites an earlier
/// one). Once a time is recorded, every stop from there on, the matching
/// stop included, becomes the terminal stop, so the last stop listed wins.
///
/// Returns `None` if the trip never reaches `stop_id` with an arrival.
///
/// The terminal stop is the last stop the feed lists for the trip, not a
/// schedule destination. A trip that ends at `stop_id` reports `stop_id`
/// itself.
pub fn extract_arrival<'a>(trip: &'a TripUpdate, stop_id: &str) -> Option<TripArrival<'a>> {
    let mut arrival_time = None;
    let mut last_stop = None;

    for update in &trip.stop_time_updates {
        if update.stop_id == stop_id
            && let Some(arrival) = update.arrival
        {
            arrival_time = Some(arrival);
        }

        if arrival_time.is_some() {
            last_stop = Some(update.stop_id.as_str());
        }
    }

    Some(TripArrival {
        arrival: arrival_time?,
        terminal_stop: last_stop?,
    })
}

/// Resolve the display name for a terminal stop.
///
/// Drops the direction suffix and looks the bare id up; unknown stops are
/// shown as the bare id.
pub fn destination_name(terminal_stop: &str, names: &StationNames) -> String {
    let bare = strip_direction(terminal_stop);
    names.get(bare).unwrap_or(bare).to_string()
}

/// List upcoming arrivals at `stop_id`, soonest first.
///
/// # Arguments
///
/// * `feed` - The decoded real-time feed
/// * `stop_id` - Feed stop id including direction (e.g. "127N")
/// * `names` - Station table used to name destinations
/// * `now` - Current time, epoch seconds
///
/// # Returns
///
/// One prediction per trip that arrives at the stop, excluding trains more
/// than two minutes gone, sorted by arrival time. Trips arriving at the
/// same second keep feed order.
pub fn upcoming_arrivals(
    feed: &FeedMessage,
    stop_id: &str,
    names: &StationNames,
    now: i64,
) -> Vec<ArrivalPrediction> {
    let mut arrivals: Vec<ArrivalPrediction> = feed
        .trip_updates()
        .filter_map(|trip| {
            let found = extract_arrival(trip, stop_id)?;
            let minutes_away = minutes_until(found.arrival, now);
            if minutes_away <= RECENCY_CUTOFF_MINS {
                return None;
            }

            Some(ArrivalPrediction {
                route: trip.route_id.clone(),
                arrival: found.arrival,
                destination: destination_name(found.terminal_stop, names),
                minutes_away,
            })
        })
        .collect();

    // Stable sort keeps feed order for equal arrival times
    arrivals.sort_by_key(|a| a.arrival);
    arrivals
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Entity, StopTimeUpdate};
    use proptest::prelude::*;

    const NOW: i64 = 1_700_000_000;

    /// Stops drawn from a small pool so trips often share the target.
    fn arb_stop() -> impl Strategy<Value = StopTimeUpdate> {
        (
            prop::sample::select(vec!["101N", "102N", "103N", "104N"]),
            prop::option::of(NOW - 600..NOW + 3600),
        )
            .prop_map(|(stop, arrival)| StopTimeUpdate {
                stop_id: stop.to_string(),
                arrival,
            })
    }

    fn arb_trip() -> impl Strategy<Value = TripUpdate> {
        (
            "[1-7ACEGJLMNQRWZ]",
            prop::collection::vec(arb_stop(), 0..6),
        )
            .prop_map(|(route, stops)| TripUpdate::new(route, stops))
    }

    fn arb_feed() -> impl Strategy<Value = FeedMessage> {
        prop::collection::vec(
            prop_oneof![
                4 => arb_trip().prop_map(Entity::TripUpdate),
                1 => Just(Entity::Other),
            ],
            0..12,
        )
        .prop_map(FeedMessage::new)
    }

    proptest! {
        /// Output is sorted by raw arrival time
        #[test]
        fn output_sorted_by_arrival(feed in arb_feed()) {
            let arrivals = upcoming_arrivals(&feed, "102N", &StationNames::empty(), NOW);
            for pair in arrivals.windows(2) {
                prop_assert!(pair[0].arrival <= pair[1].arrival);
            }
        }

        /// Nothing more than two minutes gone survives
        #[test]
        fn recency_filter_holds(feed in arb_feed()) {
            let arrivals = upcoming_arrivals(&feed, "102N", &StationNames::empty(), NOW);
            for a in &arrivals {
                prop_assert!(a.minutes_away > -2);
                prop_assert_eq!(a.minutes_away, (a.arrival - NOW).div_euclid(60));
            }
        }

        /// Every prediction comes from a trip that has the stop with that arrival
        #[test]
        fn predictions_are_sound(feed in arb_feed()) {
            let arrivals = upcoming_arrivals(&feed, "102N", &StationNames::empty(), NOW);
            for a in &arrivals {
                let backed = feed.trip_updates().any(|trip| {
                    trip.route_id == a.route
                        && trip.stop_time_updates.iter().any(|stu| {
                            stu.stop_id == "102N" && stu.arrival == Some(a.arrival)
                        })
                });
                prop_assert!(backed);
            }
        }

        /// At most one prediction per trip update
        #[test]
        fn bounded_by_trip_count(feed in arb_feed()) {
            let arrivals = upcoming_arrivals(&feed, "102N", &StationNames::empty(), NOW);
            prop_assert!(arrivals.len() <= feed.trip_updates().count());
        }

        /// Destinations are always a bare id when no names are known
        #[test]
        fn unnamed_destinations_are_bare_ids(feed in arb_feed()) {
            let arrivals = upcoming_arrivals(&feed, "102N", &StationNames::empty(), NOW);
            for a in &arrivals {
                prop_assert!(["101", "102", "103", "104"].contains(&a.destination.as_str()));
            }
        }
    }
}
