//! User entity - represents a chirpy account

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User account with credentials and membership status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub hashed_password: String,
    pub is_chirpy_red: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User from an email and an already-hashed password
    pub fn new(email: String, hashed_password: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            hashed_password,
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace email and password hash
    pub fn set_credentials(&mut self, email: String, hashed_password: String) {
        self.email = email;
        self.hashed_password = hashed_password;
        self.updated_at = Utc::now();
    }

    /// Mark the account as a Chirpy Red member
    pub fn upgrade_to_chirpy_red(&mut self) {
        self.is_chirpy_red = true;
        self.updated_at = Utc::now();
    }
}
