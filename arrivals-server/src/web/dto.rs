//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::ArrivalPrediction;

/// One upcoming train at a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalResult {
    /// Route id (e.g. "1", "A")
    pub route: String,

    /// Predicted arrival, epoch seconds
    pub arrival: i64,

    /// Where the train is heading
    pub destination: String,

    /// Whole minutes until arrival
    pub minutes_away: i64,
}

/// Request to change the designated stop.
#[derive(Debug, Deserialize)]
pub struct SetStopRequest {
    /// New stop id (e.g. "137N")
    pub stop_id: String,
}

/// Confirmation of a designated stop change.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetStopResponse {
    /// Human-readable confirmation
    pub success: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" while the server is answering
    pub status: &'static str,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl From<ArrivalPrediction> for ArrivalResult {
    fn from(p: ArrivalPrediction) -> Self {
        Self {
            route: p.route,
            arrival: p.arrival,
            destination: p.destination,
            minutes_away: p.minutes_away,
        }
    }
}

impl SetStopResponse {
    /// Confirmation for a stop change to `stop_id`.
    pub fn updated(stop_id: &str) -> Self {
        Self {
            success: format!("default stop_id updated to {stop_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrival_result_wire_shape() {
        let result = ArrivalResult::from(ArrivalPrediction {
            route: "1".to_string(),
            arrival: 1_700_000_300,
            destination: "South Ferry".to_string(),
            minutes_away: 5,
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "route": "1",
                "arrival": 1_700_000_300,
                "destination": "South Ferry",
                "minutes_away": 5,
            })
        );
    }

    #[test]
    fn set_stop_confirmation_text() {
        let response = SetStopResponse::updated("137N");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"success": "default stop_id updated to 137N"})
        );
    }

    #[test]
    fn set_stop_request_requires_stop_id() {
        let ok: SetStopRequest = serde_json::from_str(r#"{"stop_id": "R11S"}"#).unwrap();
        assert_eq!(ok.stop_id, "R11S");

        assert!(serde_json::from_str::<SetStopRequest>("{}").is_err());
        assert!(serde_json::from_str::<SetStopRequest>(r#"{"stop_id": 42}"#).is_err());
    }
}
