//! Application error types and Axum response conversion.

use std::any::Any;

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// The body could not be read at all (too large, connection dropped).
    #[error("Body rejected: {0}")]
    Body(#[from] BytesRejection),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            AppError::Body(rejection) => rejection.into_response(),
            AppError::NotFound => detail_response(StatusCode::NOT_FOUND, "Not Found"),
            AppError::MethodNotAllowed => {
                detail_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                internal_error_response()
            }
        }
    }
}

fn detail_response(status: StatusCode, detail: &'static str) -> Response {
    (status, Json(ErrorResponse { detail })).into_response()
}

pub fn internal_error_response() -> Response {
    detail_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

/// Used by `CatchPanicLayer` so a panicking handler still answers with a 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %reason, "Handler panicked");
    internal_error_response()
}
