//! Chirp handlers
//!
//! Endpoints for posting, listing, fetching, and deleting chirps.

use axum::{
    extract::{Path, State},
    Json,
};
use chirpy_service::dto::{ChirpResponse, CreateChirpRequest};
use chirpy_service::ChirpService;
use uuid::Uuid;

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new chirp
///
/// POST /api/chirps
pub async fn create_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateChirpRequest>,
) -> ApiResult<Created<Json<ChirpResponse>>> {
    let service = ChirpService::new(state.service_context());
    let response = service.create_chirp(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List all chirps, oldest first
///
/// GET /api/chirps
pub async fn list_chirps(State(state): State<AppState>) -> ApiResult<Json<Vec<ChirpResponse>>> {
    let service = ChirpService::new(state.service_context());
    let chirps = service.list_chirps().await?;
    Ok(Json(chirps))
}

/// Get a single chirp
///
/// GET /api/chirps/:chirp_id
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> ApiResult<Json<ChirpResponse>> {
    let chirp_id = parse_chirp_id(&chirp_id)?;

    let service = ChirpService::new(state.service_context());
    let response = service.get_chirp(chirp_id).await?;
    Ok(Json(response))
}

/// Delete a chirp; only its author may do so
///
/// DELETE /api/chirps/:chirp_id
pub async fn delete_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(chirp_id): Path<String>,
) -> ApiResult<NoContent> {
    let chirp_id = parse_chirp_id(&chirp_id)?;

    let service = ChirpService::new(state.service_context());
    service.delete_chirp(chirp_id, auth.user_id).await?;
    Ok(NoContent)
}

fn parse_chirp_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid chirp_id format"))
}
