//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            password: "correct horse battery".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            email: signup.email.clone(),
            password: signup.password.clone(),
        }
    }
}

/// User response body
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub id: Uuid,
    pub email: String,
    pub is_chirpy_red: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Login response body
///
/// User fields are flattened alongside the tokens on the wire.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub id: Uuid,
    pub email: String,
    pub is_chirpy_red: bool,
    pub created_at: String,
    pub updated_at: String,
    pub token: String,
    pub refresh_token: String,
}

/// Access token response body
#[derive(Debug, Deserialize)]
pub struct TokenBody {
    pub token: String,
}

/// Chirp creation request
#[derive(Debug, Serialize)]
pub struct ChirpRequest {
    pub body: String,
}

impl ChirpRequest {
    pub fn text(body: &str) -> Self {
        Self {
            body: body.to_string(),
        }
    }
}

/// Chirp response body
#[derive(Debug, Deserialize)]
pub struct ChirpBody {
    pub id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Polka webhook payload
#[derive(Debug, Serialize)]
pub struct PolkaEvent {
    pub event: String,
    pub data: PolkaEventData,
}

#[derive(Debug, Serialize)]
pub struct PolkaEventData {
    pub user_id: Uuid,
}

impl PolkaEvent {
    pub fn upgrade(user_id: Uuid) -> Self {
        Self {
            event: "user.upgraded".to_string(),
            data: PolkaEventData { user_id },
        }
    }

    pub fn other(event: &str, user_id: Uuid) -> Self {
        Self {
            event: event.to_string(),
            data: PolkaEventData { user_id },
        }
    }
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
