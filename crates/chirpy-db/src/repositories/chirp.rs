//! PostgreSQL implementation of ChirpRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use chirpy_core::entities::Chirp;
use chirpy_core::traits::{ChirpRepository, RepoResult};

use crate::models::ChirpModel;

use super::error::{chirp_not_found, map_db_error};

/// PostgreSQL implementation of ChirpRepository
#[derive(Clone)]
pub struct PgChirpRepository {
    pool: PgPool,
}

impl PgChirpRepository {
    /// Create a new PgChirpRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChirpRepository for PgChirpRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Chirp>> {
        let result = sqlx::query_as::<_, ChirpModel>(
            r"
            SELECT id, user_id, body, created_at, updated_at
            FROM chirps
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Chirp::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Chirp>> {
        let result = sqlx::query_as::<_, ChirpModel>(
            r"
            SELECT id, user_id, body, created_at, updated_at
            FROM chirps
            ORDER BY created_at ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Chirp::from).collect())
    }

    #[instrument(skip(self, chirp), fields(chirp_id = %chirp.id))]
    async fn create(&self, chirp: &Chirp) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO chirps (id, user_id, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(chirp.id)
        .bind(chirp.user_id)
        .bind(&chirp.body)
        .bind(chirp.created_at)
        .bind(chirp.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM chirps
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(chirp_not_found(id));
        }

        Ok(())
    }
}
