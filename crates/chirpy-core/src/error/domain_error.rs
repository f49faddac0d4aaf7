//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Chirp not found: {0}")]
    ChirpNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Chirp is too long. Max length is {max}")]
    ChirpTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the chirp author")]
    NotChirpAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Refresh token already exists")]
    RefreshTokenCollision,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChirpNotFound(_) => "UNKNOWN_CHIRP",

            // Validation
            Self::ChirpTooLong { .. } => "CHIRP_TOO_LONG",

            // Authorization
            Self::NotChirpAuthor => "NOT_CHIRP_AUTHOR",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::RefreshTokenCollision => "REFRESH_TOKEN_COLLISION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ChirpNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ChirpTooLong { .. })
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotChirpAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::RefreshTokenCollision
        )
    }
}
