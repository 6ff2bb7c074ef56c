//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::arrivals::upcoming_arrivals;
use crate::feed::FeedError;

use super::dto::*;
use super::state::AppState;

/// Message returned for any rejected designated stop change.
const INVALID_STOP_MESSAGE: &str = "invalid stop_id provided";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/train/getStop", get(designated_arrivals))
        .route("/train/setStop", post(set_stop))
        .route("/train/:stop_id", get(stop_arrivals))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Upcoming arrivals at the stop named in the path.
async fn stop_arrivals(
    State(state): State<AppState>,
    Path(stop_id): Path<String>,
) -> Result<Json<Vec<ArrivalResult>>, AppError> {
    arrivals_at(&state, &stop_id).await.map(Json)
}

/// Upcoming arrivals at the designated stop.
async fn designated_arrivals(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArrivalResult>>, AppError> {
    // Snapshot the stop; the lock is released before the feed is fetched
    let stop = state.designated.get().await;
    arrivals_at(&state, stop.as_str()).await.map(Json)
}

/// Change the designated stop.
async fn set_stop(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SetStopResponse>, AppError> {
    // Parse JSON manually so malformed bodies get the same error shape
    let req: SetStopRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, len = body.len(), "unparsable setStop body");
        AppError::BadRequest {
            message: INVALID_STOP_MESSAGE.to_string(),
        }
    })?;

    let stop = state.designated.set(&req.stop_id).await.map_err(|e| {
        warn!(stop_id = %req.stop_id, error = %e, "rejected designated stop");
        AppError::BadRequest {
            message: INVALID_STOP_MESSAGE.to_string(),
        }
    })?;

    info!(stop_id = %stop, "designated stop updated");
    Ok(Json(SetStopResponse::updated(stop.as_str())))
}

/// Fetch the feed and project arrivals at `stop_id`.
async fn arrivals_at(state: &AppState, stop_id: &str) -> Result<Vec<ArrivalResult>, AppError> {
    let feed = state.feed.current().await?;
    let now = Utc::now().timestamp();

    let arrivals = upcoming_arrivals(&feed, stop_id, &state.station_names, now);
    info!(stop_id, count = arrivals.len(), "arrivals computed");

    Ok(arrivals.into_iter().map(ArrivalResult::from).collect())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        if e.is_transport() {
            AppError::BadGateway {
                message: format!("Failed to fetch feed data: {e}"),
            }
        } else {
            AppError::Internal {
                message: e.to_string(),
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
