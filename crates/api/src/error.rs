//! Mapping of domain and database failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use confera_core::error::CoreError;
use serde_json::json;

/// Message returned whenever the real cause must stay server-side.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Error type returned by every handler in this crate.
///
/// Domain failures arrive as [`CoreError`] and database failures as
/// [`sqlx::Error`]; both convert via `?`. The `IntoResponse` impl renders
/// the service-wide `{"error", "code"}` body, keeping internal detail out
/// of what clients see.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Shorthand for handler return types.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
        };

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// Status, machine-readable code, and client message for a domain error.
/// Internal errors are logged and replaced with a generic message.
fn core_parts(core: CoreError) -> (StatusCode, &'static str, String) {
    let (status, code) = match &core {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        CoreError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        CoreError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
        CoreError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        CoreError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal error");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            );
        }
    };
    (status, code, core.to_string())
}

/// Database failures surface as sanitized 500s, with two exceptions that
/// carry real HTTP meaning: row-not-found lookups (404) and violations of
/// `uq_`-named unique constraints (409).
fn database_parts(err: sqlx::Error) -> (StatusCode, &'static str, String) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = &err {
        // 23505 is PostgreSQL's unique_violation.
        if db_err.code().as_deref() == Some("23505") {
            if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value for unique constraint {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}
