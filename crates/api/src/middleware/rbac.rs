//! Role extractors layered on top of [`AuthUser`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use confera_core::error::CoreError;
use confera_core::roles;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Extractor for routes reserved to users who manage events (organizers
/// and admins). Authenticated callers with any other role get 403.
pub struct RequireOrganizer(pub AuthUser);

impl FromRequestParts<AppState> for RequireOrganizer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !roles::can_manage_events(&user.role) {
            return Err(AppError::Core(CoreError::Forbidden(
                "event management privileges required".to_string(),
            )));
        }
        Ok(RequireOrganizer(user))
    }
}
