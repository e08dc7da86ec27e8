//! Error handling module
//!
//! Provides unified error types and handling for the entire application.
//! Callers only ever see one of two fixed messages; the detail stays in the logs.

use crate::mailer::MailError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";
pub const DELIVERY_FAILED_MESSAGE: &str = "Error sending email";

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<String> },

    #[error("Delivery error: {0}")]
    Delivery(#[from] MailError),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation { missing } => {
                warn!("Missing required fields: {:?}", missing);
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
            }
            AppError::Delivery(e) => {
                error!("Email error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, DELIVERY_FAILED_MESSAGE)
            }
        };

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;
