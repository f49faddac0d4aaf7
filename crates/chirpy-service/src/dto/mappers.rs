//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chirpy_core::entities::{Chirp, User};

use super::responses::{ChirpResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            is_chirpy_red: user.is_chirpy_red,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Chirp Mappers
// ============================================================================

impl From<&Chirp> for ChirpResponse {
    fn from(chirp: &Chirp) -> Self {
        Self {
            id: chirp.id,
            user_id: chirp.user_id,
            body: chirp.body.clone(),
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
        }
    }
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self::from(&chirp)
    }
}
