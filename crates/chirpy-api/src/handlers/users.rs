//! User handlers
//!
//! Endpoints for user signup and credential updates.

use axum::{extract::State, Json};
use chirpy_service::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use chirpy_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(request).await?;
    Ok(Created(Json(response)))
}

/// Replace the authenticated user's email and password
///
/// PUT /api/users
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_credentials(auth.user_id, request).await?;
    Ok(Json(response))
}
