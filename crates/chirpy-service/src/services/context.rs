//! Service context - dependency container for services
//!
//! Holds the repositories and token machinery shared by all services.

use std::sync::Arc;

use chirpy_common::auth::JwtService;
use chirpy_core::traits::{ChirpRepository, RefreshTokenRepository, UserRepository};
use chirpy_core::REFRESH_TOKEN_TTL_DAYS;
use chrono::Duration;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for access tokens
/// - Refresh token lifetime policy
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    chirp_repo: Arc<dyn ChirpRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    // Policy
    refresh_token_ttl: Duration,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        chirp_repo: Arc<dyn ChirpRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        jwt_service: Arc<JwtService>,
        refresh_token_ttl: Duration,
    ) -> Self {
        Self {
            user_repo,
            chirp_repo,
            refresh_token_repo,
            jwt_service,
            refresh_token_ttl,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the chirp repository
    pub fn chirp_repo(&self) -> &dyn ChirpRepository {
        self.chirp_repo.as_ref()
    }

    /// Get the refresh token repository
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    // === Policy ===

    /// Lifetime applied to newly issued refresh tokens
    #[must_use]
    pub fn refresh_token_ttl(&self) -> Duration {
        self.refresh_token_ttl
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    chirp_repo: Option<Arc<dyn ChirpRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    refresh_token_ttl: Option<Duration>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            chirp_repo: None,
            refresh_token_repo: None,
            jwt_service: None,
            refresh_token_ttl: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn chirp_repo(mut self, repo: Arc<dyn ChirpRepository>) -> Self {
        self.chirp_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn refresh_token_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_token_ttl = Some(ttl);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.chirp_repo
                .ok_or_else(|| super::error::ServiceError::validation("chirp_repo is required"))?,
            self.refresh_token_repo.ok_or_else(|| {
                super::error::ServiceError::validation("refresh_token_repo is required")
            })?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
            self.refresh_token_ttl
                .unwrap_or_else(|| Duration::days(REFRESH_TOKEN_TTL_DAYS)),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
