//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. UUIDs serialize
//! as hyphenated strings; timestamps as RFC 3339.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// User Responses
// ============================================================================

/// User profile response
///
/// The password digest never leaves the service layer.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub is_chirpy_red: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Login response: the user profile plus both credentials
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

impl LoginResponse {
    pub fn new(user: UserResponse, token: String, refresh_token: String) -> Self {
        Self {
            user,
            token,
            refresh_token,
        }
    }
}

/// Refreshed access token response
#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub token: String,
}

// ============================================================================
// Chirp Responses
// ============================================================================

/// Chirp response
#[derive(Debug, Clone, Serialize)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
