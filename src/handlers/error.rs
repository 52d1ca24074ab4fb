//! Error responses shared by the handlers

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    Json,
};
use sea_orm::DbErr;
use tracing::{error, warn};

use crate::models::error::ErrorResponse;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn bad_request(message: impl Into<String>) -> ApiError {
    let message = message.into();
    warn!(error = %message, "Rejected request");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message }),
    )
}

pub fn database_error(e: DbErr) -> ApiError {
    error!(error = %e, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Database error: {}", e),
        }),
    )
}

/// Malformed bodies, wrong types, missing fields and a missing JSON
/// content type are all client errors
pub fn json_rejection(rejection: JsonRejection) -> ApiError {
    let message = match &rejection {
        JsonRejection::JsonDataError(e) => format!("Invalid request body: {}", e.body_text()),
        JsonRejection::JsonSyntaxError(e) => format!("Malformed JSON: {}", e.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Request must include 'Content-Type: application/json' header".to_string()
        }
        other => other.body_text(),
    };
    bad_request(message)
}

pub fn path_rejection(rejection: PathRejection) -> ApiError {
    bad_request(format!("Invalid path parameter: {}", rejection.body_text()))
}
