//! Authentication service
//!
//! Handles login, access token refresh, revocation, and per-request
//! identity extraction.

use chirpy_common::auth::{verify_password, DUMMY_PASSWORD_HASH};
use chirpy_common::AppError;
use chirpy_core::entities::RefreshToken;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{LoginRequest, LoginResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password fail with the same error, and the
    /// unknown-email path burns the same KDF cost against a dummy digest so
    /// neither content nor timing reveals whether the account exists.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let LoginRequest { email, password } = request;

        let user = self.ctx.user_repo().find_by_email(&email).await?;

        let (user, password_matches) = match user {
            Some(user) => {
                let digest = user.hashed_password.clone();
                let matches =
                    tokio::task::spawn_blocking(move || verify_password(&password, &digest))
                        .await
                        .map_err(|e| ServiceError::internal(e.to_string()))?;
                (Some(user), matches)
            }
            None => {
                tokio::task::spawn_blocking(move || {
                    verify_password(&password, DUMMY_PASSWORD_HASH)
                })
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
                (None, false)
            }
        };

        let Some(user) = user else {
            warn!("Login failed: unknown email");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        };

        if !password_matches {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let access_token = self.ctx.jwt_service().issue_access_token(user.id)?;

        // Each login gets its own refresh token; earlier ones stay valid
        let refresh_token =
            RefreshToken::issue_with_ttl(user.id, self.ctx.refresh_token_ttl());
        self.ctx.refresh_token_repo().create(&refresh_token).await?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse::new(
            UserResponse::from(&user),
            access_token,
            refresh_token.token,
        ))
    }

    /// Exchange a valid refresh token for a new access token
    ///
    /// The refresh token itself is not rotated; it stays usable until it
    /// expires or is explicitly revoked.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<String> {
        let token = self
            .ctx
            .refresh_token_repo()
            .find_by_token(refresh_token)
            .await?
            .filter(RefreshToken::is_valid)
            .ok_or_else(|| {
                // Unknown, expired, and revoked are indistinguishable outward
                warn!("Refresh failed: unknown or invalid token");
                ServiceError::App(AppError::InvalidToken)
            })?;

        let access_token = self.ctx.jwt_service().issue_access_token(token.user_id)?;

        info!(user_id = %token.user_id, "Access token refreshed");
        Ok(access_token)
    }

    /// Revoke a refresh token
    ///
    /// Succeeds even when the token is unknown or already revoked, so
    /// repeated client-side logout calls are safe.
    #[instrument(skip(self, refresh_token))]
    pub async fn revoke(&self, refresh_token: &str) -> ServiceResult<()> {
        self.ctx.refresh_token_repo().revoke(refresh_token).await?;
        info!("Refresh token revoked");
        Ok(())
    }

    /// Validate an access token and return the caller's user ID
    #[instrument(skip(self, token))]
    pub fn authenticate(&self, token: &str) -> ServiceResult<Uuid> {
        Ok(self.ctx.jwt_service().verify_access_token(token)?)
    }

    /// Check that an authenticated user owns a resource
    ///
    /// A `false` here is a forbidden outcome, distinct from the unauthorized
    /// outcome of a failed [`authenticate`](Self::authenticate).
    #[must_use]
    pub fn authorize_owner(user_id: Uuid, owner_id: Uuid) -> bool {
        user_id == owner_id
    }
}
