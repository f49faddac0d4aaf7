//! PostgreSQL implementation of RefreshTokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chirpy_core::entities::RefreshToken;
use chirpy_core::error::DomainError;
use chirpy_core::traits::{RefreshTokenRepository, RepoResult};

use crate::models::RefreshTokenModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of RefreshTokenRepository
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new PgRefreshTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    // Token values are credentials; keep them out of spans
    #[instrument(skip(self, token))]
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<RefreshToken>> {
        let result = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT token, user_id, created_at, updated_at, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token = $1
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RefreshToken::from))
    }

    #[instrument(skip(self, token), fields(user_id = %token.user_id))]
    async fn create(&self, token: &RefreshToken) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO refresh_tokens (token, user_id, created_at, updated_at, expires_at, revoked_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&token.token)
        .bind(token.user_id)
        .bind(token.created_at)
        .bind(token.updated_at)
        .bind(token.expires_at)
        .bind(token.revoked_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RefreshTokenCollision))?;

        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn revoke(&self, token: &str) -> RepoResult<()> {
        // Unknown or already-revoked tokens are not an error
        sqlx::query(
            r"
            UPDATE refresh_tokens
            SET revoked_at = NOW(), updated_at = NOW()
            WHERE token = $1
            ",
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
