use crate::error;
use crate::launch_registry::ScheduleError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use strum_macros::Display;

/// Failure of a route handler, rendered as a JSON `{ "error": ... }` body.
#[derive(Debug, Display)]
pub enum RouteError {
    Schedule(ScheduleError),
    /// The launch request body is not JSON or does not have the expected shape.
    InvalidBody(JsonRejection),
    LaunchNotFound,
    NotAborted,
    Database(DbErr),
}

impl RouteError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            RouteError::Schedule(ScheduleError::MissingField(_)) | RouteError::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, "Missing required launch property")
            }
            RouteError::Schedule(ScheduleError::InvalidDate(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid launch date")
            }
            RouteError::Schedule(ScheduleError::TargetNotFound(_)) => {
                (StatusCode::BAD_REQUEST, "Matching planet not found")
            }
            RouteError::LaunchNotFound => (StatusCode::NOT_FOUND, "Launch not found"),
            RouteError::NotAborted => (StatusCode::BAD_REQUEST, "Launch not aborted"),
            RouteError::Schedule(ScheduleError::Database(_)) | RouteError::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        match &self {
            RouteError::Schedule(ScheduleError::Database(e)) | RouteError::Database(e) => {
                error!("Launch store failure: {e}");
            }
            _ => (),
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl std::error::Error for RouteError {}

impl From<ScheduleError> for RouteError {
    fn from(value: ScheduleError) -> Self { RouteError::Schedule(value) }
}

impl From<JsonRejection> for RouteError {
    fn from(value: JsonRejection) -> Self { RouteError::InvalidBody(value) }
}

impl From<DbErr> for RouteError {
    fn from(value: DbErr) -> Self { RouteError::Database(value) }
}
