//! Unified error types for the Calculator API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Calculation model errors (invalid operands, division by zero)
//! - `ObserverError`: Observer port failures
//! - `StoreError`: Store port failures
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - raised by the calculation model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Invalid scale: {0}")]
    InvalidScale(i64),
}

/// Observer port errors
#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("Observation sink failed: {0}")]
    Sink(String),
}

/// Store port errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Application layer errors - used by the use case and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Observer error: {0}")]
    Observer(#[from] ObserverError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::InvalidOperand(msg)) => (
                StatusCode::BAD_REQUEST,
                "Invalid operand",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::DivisionByZero) => (
                StatusCode::BAD_REQUEST,
                "Division by zero",
                Some(DomainError::DivisionByZero.to_string()),
            ),
            AppError::Domain(e @ DomainError::InvalidScale(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid scale", Some(e.to_string()))
            }
            AppError::Observer(e) => {
                tracing::error!("Observer error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
