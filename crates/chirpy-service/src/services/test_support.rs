//! In-memory repository stand-ins for service unit tests
//!
//! The stubs model an empty store: lookups find nothing, writes succeed,
//! and the user stub counts upgrade attempts so tests can assert whether
//! a service reached the repository at all.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use async_trait::async_trait;
use chirpy_common::auth::JwtService;
use chirpy_core::entities::{Chirp, RefreshToken, User};
use chirpy_core::traits::{ChirpRepository, RefreshTokenRepository, RepoResult, UserRepository};
use chirpy_core::DomainError;
use chrono::Duration;
use uuid::Uuid;

use super::context::ServiceContext;

/// User store stub. Holds no users; `create` collides when primed.
#[derive(Default)]
pub struct StubUserRepo {
    /// When set, `create` reports the email as taken
    pub duplicate_email: bool,
    /// Number of `upgrade_to_chirpy_red` calls seen
    pub upgrades: AtomicUsize,
}

#[async_trait]
impl UserRepository for StubUserRepo {
    async fn find_by_id(&self, _id: Uuid) -> RepoResult<Option<User>> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &str) -> RepoResult<Option<User>> {
        Ok(None)
    }

    async fn create(&self, _user: &User) -> RepoResult<()> {
        if self.duplicate_email {
            return Err(DomainError::EmailAlreadyExists);
        }
        Ok(())
    }

    async fn update_credentials(&self, _user: &User) -> RepoResult<()> {
        Ok(())
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> RepoResult<()> {
        self.upgrades
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Err(DomainError::UserNotFound(id))
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        Ok(0)
    }
}

pub struct StubChirpRepo;

#[async_trait]
impl ChirpRepository for StubChirpRepo {
    async fn find_by_id(&self, _id: Uuid) -> RepoResult<Option<Chirp>> {
        Ok(None)
    }

    async fn find_all(&self) -> RepoResult<Vec<Chirp>> {
        Ok(Vec::new())
    }

    async fn create(&self, _chirp: &Chirp) -> RepoResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: Uuid) -> RepoResult<()> {
        Ok(())
    }
}

pub struct StubRefreshTokenRepo;

#[async_trait]
impl RefreshTokenRepository for StubRefreshTokenRepo {
    async fn find_by_token(&self, _token: &str) -> RepoResult<Option<RefreshToken>> {
        Ok(None)
    }

    async fn create(&self, _token: &RefreshToken) -> RepoResult<()> {
        Ok(())
    }

    async fn revoke(&self, _token: &str) -> RepoResult<()> {
        Ok(())
    }
}

/// Build a context over the given user store and empty stubs elsewhere
pub fn context_with_users(user_repo: Arc<StubUserRepo>) -> ServiceContext {
    ServiceContext::new(
        user_repo,
        Arc::new(StubChirpRepo),
        Arc::new(StubRefreshTokenRepo),
        Arc::new(JwtService::new("unit-test-secret", 3600)),
        Duration::days(60),
    )
}
