//! Authentication extractor
//!
//! Extracts and validates JWT access tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chirpy_service::AuthService;
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the access token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// User ID the token was issued to
    pub user_id: Uuid,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Validate the token
        let app_state = AppState::from_ref(state);
        let user_id = AuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Access token rejected");
                ApiError::Service(e)
            })?;

        Ok(AuthUser::new(user_id))
    }
}
