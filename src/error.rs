//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Message returned to callers for any failure whose detail stays in the server log.
pub const OPAQUE_MESSAGE: &str = "Unexpected error - check server logs";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("validation: {0}")]
    Validation(String),
}

/// Failures reported by a document collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Unique index violation; holds the conflicting key, e.g. `{"name": "bulbasaur"}`.
    #[error("duplicate key {0}")]
    DuplicateKey(Value),
    #[error("mongodb: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("backend: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("Pokemon exists in db {0}")]
    Duplicate(Value),
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Store failure other than a duplicate key. Displays only [`OPAQUE_MESSAGE`];
    /// the detail is the error's `source` and is logged when the error is created.
    #[error("{}", OPAQUE_MESSAGE)]
    Internal(#[source] StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(key) => AppError::Duplicate(key),
            other => {
                tracing::error!(error = %other, "store operation failed");
                AppError::Internal(other)
            }
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Duplicate(_) => (StatusCode::BAD_REQUEST, "duplicate_key"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        };
        let message = match &self {
            AppError::NotFound(msg) => msg.clone(),
            other => other.to_string(),
        };
        let details = match self {
            AppError::Duplicate(key) => Some(key),
            _ => None,
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}
