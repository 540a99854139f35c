//! Authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use confera_core::error::CoreError;
use confera_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// The caller behind a request, taken from the `Authorization: Bearer`
/// header. Listing this as a handler argument makes the route require a
/// valid access token (401 otherwise).
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: String,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}

/// Pull the bearer token out of the `Authorization` header.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| unauthorized("missing Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("expected a Bearer token"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state
            .config
            .jwt
            .decode_access_token(token)
            .map_err(|_| unauthorized("invalid or expired token"))?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
