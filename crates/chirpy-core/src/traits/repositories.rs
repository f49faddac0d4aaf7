//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Chirp, RefreshToken, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update email and password hash
    async fn update_credentials(&self, user: &User) -> RepoResult<()>;

    /// Flag the user as a Chirpy Red member
    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> RepoResult<()>;

    /// Delete every user, returning the number of rows removed
    async fn delete_all(&self) -> RepoResult<u64>;
}

// ============================================================================
// Chirp Repository
// ============================================================================

#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Find chirp by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Chirp>>;

    /// List all chirps, oldest first
    async fn find_all(&self) -> RepoResult<Vec<Chirp>>;

    /// Create a new chirp
    async fn create(&self, chirp: &Chirp) -> RepoResult<()>;

    /// Delete a chirp
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Find a token by its value
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<RefreshToken>>;

    /// Persist a newly issued token
    async fn create(&self, token: &RefreshToken) -> RepoResult<()>;

    /// Mark a token revoked; succeeds even if the token is unknown or already revoked
    async fn revoke(&self, token: &str) -> RepoResult<()>;
}
