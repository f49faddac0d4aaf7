//! Chirp entity - represents a single post

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum chirp body length, counted in characters
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Chirp entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chirp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chirp {
    /// Create a new Chirp authored by the given user
    pub fn new(user_id: Uuid, body: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            body,
            created_at: now,
            updated_at: now,
        }
    }
}
