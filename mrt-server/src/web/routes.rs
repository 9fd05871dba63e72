//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::service::ScheduleError;

use super::dto::*;
use super::state::AppState;

const LIST_OK: &str = "Successfully get all station";
const LIST_FAILED: &str = "Failed to get all station";
const SCHEDULES_OK: &str = "Successfully get schedules by station";
const SCHEDULES_FAILED: &str = "Failed to get schedules by station";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let stations = Router::new()
        .route("/stations", get(list_stations))
        .route("/stations/", get(list_stations))
        .route("/stations/:id", get(station_schedules));

    Router::new()
        .route("/health", get(health))
        .nest("/v1/api", stations)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station in the feed.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StationResponse>>>, AppError> {
    let stations = state
        .stations
        .list_stations()
        .await
        .map_err(|e| AppError::new(LIST_FAILED, e))?;

    let data = stations.into_iter().map(StationResponse::from).collect();
    Ok(Json(ApiResponse::ok(LIST_OK, data)))
}

/// Upcoming departures for one station.
async fn station_schedules(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ScheduleResponse>>>, AppError> {
    let departures = state
        .stations
        .station_schedules(&id)
        .await
        .map_err(|e| AppError::new(SCHEDULES_FAILED, e))?;

    let data = departures.iter().map(ScheduleResponse::from).collect();
    Ok(Json(ApiResponse::ok(SCHEDULES_OK, data)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, error: String },
    BadGateway { message: String, error: String },
}

impl AppError {
    fn new(message: &str, err: ScheduleError) -> Self {
        let message = message.to_string();
        let error = err.to_string();
        match err {
            ScheduleError::StationNotFound { .. } => AppError::NotFound { message, error },
            ScheduleError::UpstreamUnavailable(_) | ScheduleError::MalformedFeed(_) => {
                AppError::BadGateway { message, error }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::NotFound { message, error } => {
                warn!(%error, "{message}");
                (StatusCode::NOT_FOUND, message, error)
            }
            AppError::BadGateway { message, error } => {
                error!(%error, "{message}");
                (StatusCode::BAD_GATEWAY, message, error)
            }
        };

        let body = Json(ApiResponse::<()>::failure(message, error));
        (status, body).into_response()
    }
}
