use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

/// PostgreSQL error code for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL error code for CHECK constraint violations
const CHECK_VIOLATION: &str = "23514";
/// PostgreSQL error code for numeric values outside a column's precision
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Convert a write failure into an AppError, turning reference, CHECK and
/// numeric range violations into validation errors instead of 500s.
///
/// `missing_reference` is the message reported when a foreign key points
/// at a row that does not exist.
pub fn handle_db_error(e: sqlx::Error, missing_reference: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.code().as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => {
                return AppError::Validation(missing_reference.to_string());
            }
            Some(CHECK_VIOLATION) => {
                let constraint = db_err.constraint().unwrap_or("check constraint");
                return AppError::Validation(format!("Value violates {}", constraint));
            }
            Some(NUMERIC_VALUE_OUT_OF_RANGE) => {
                return AppError::Validation("Numeric value out of range".to_string());
            }
            _ => {}
        }
    }

    AppError::Database(e)
}

pub type Result<T> = std::result::Result<T, AppError>;
