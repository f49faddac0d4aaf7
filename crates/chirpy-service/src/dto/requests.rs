//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying user input
//! implement `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// User signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Credential update request; both fields replace the stored values
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

// ============================================================================
// Chirp Requests
// ============================================================================

/// Create chirp request
///
/// Length and profanity rules are enforced by the chirp service, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

// ============================================================================
// Webhook Requests
// ============================================================================

/// Polka webhook envelope
#[derive(Debug, Clone, Deserialize)]
pub struct PolkaWebhookRequest {
    pub event: String,
    pub data: PolkaWebhookData,
}

/// Payload of a Polka webhook event
#[derive(Debug, Clone, Deserialize)]
pub struct PolkaWebhookData {
    pub user_id: Uuid,
}
