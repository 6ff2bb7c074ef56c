//! Arrival predictions derived from trip updates.

/// A predicted arrival of one trip at a requested stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalPrediction {
    /// Route of the trip.
    pub route: String,
    /// Predicted arrival, epoch seconds.
    pub arrival: i64,
    /// Human-readable destination, or the bare stop id when unnamed.
    pub destination: String,
    /// Whole minutes until arrival, floor-divided (negative once passed).
    pub minutes_away: i64,
}

/// What a single trip says about a target stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripArrival<'a> {
    /// Predicted arrival at the target stop, epoch seconds.
    pub arrival: i64,
    /// Last stop seen from the target stop onwards.
    pub terminal_stop: &'a str,
}

/// Minutes from `now` until `arrival`, rounded towards negative infinity.
///
/// Saturates at the `i64` bounds for timestamps far outside the present.
///
/// ```
/// use arrivals_server::domain::minutes_until;
///
/// assert_eq!(minutes_until(1_000, 1_000), 0);
/// assert_eq!(minutes_until(1_119, 1_000), 1);
/// assert_eq!(minutes_until(999, 1_000), -1);
/// ```
pub fn minutes_until(arrival: i64, now: i64) -> i64 {
    arrival.saturating_sub(now).div_euclid(60)
}
