//! Authentication handlers
//!
//! Endpoints for login, token refresh, and token revocation.

use axum::{extract::State, Json};
use chirpy_service::dto::{AccessTokenResponse, LoginRequest, LoginResponse};
use chirpy_service::AuthService;

use crate::extractors::{BearerToken, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Login with email and password
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new access token
///
/// POST /api/refresh
pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(refresh_token): BearerToken,
) -> ApiResult<Json<AccessTokenResponse>> {
    let service = AuthService::new(state.service_context());
    let token = service.refresh(&refresh_token).await?;
    Ok(Json(AccessTokenResponse { token }))
}

/// Revoke a refresh token
///
/// POST /api/revoke
pub async fn revoke(
    State(state): State<AppState>,
    BearerToken(refresh_token): BearerToken,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.revoke(&refresh_token).await?;
    Ok(NoContent)
}
