//! Chirp service
//!
//! Handles chirp creation, listing, lookup, and deletion.

use chirpy_core::entities::Chirp;
use chirpy_core::{DomainError, MAX_CHIRP_LENGTH};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{ChirpResponse, CreateChirpRequest};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Words replaced by the profanity filter, matched case-insensitively
const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Chirp service
pub struct ChirpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChirpService<'a> {
    /// Create a new ChirpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new chirp for the given author
    #[instrument(skip(self, request), fields(user_id = %author_id))]
    pub async fn create_chirp(
        &self,
        author_id: Uuid,
        request: CreateChirpRequest,
    ) -> ServiceResult<ChirpResponse> {
        if request.body.chars().count() > MAX_CHIRP_LENGTH {
            return Err(DomainError::ChirpTooLong {
                max: MAX_CHIRP_LENGTH,
            }
            .into());
        }

        let chirp = Chirp::new(author_id, clean_body(&request.body));
        self.ctx.chirp_repo().create(&chirp).await?;

        info!(chirp_id = %chirp.id, "Chirp created");
        Ok(ChirpResponse::from(&chirp))
    }

    /// List all chirps, oldest first
    #[instrument(skip(self))]
    pub async fn list_chirps(&self) -> ServiceResult<Vec<ChirpResponse>> {
        let chirps = self.ctx.chirp_repo().find_all().await?;
        Ok(chirps.iter().map(ChirpResponse::from).collect())
    }

    /// Get a single chirp by ID
    #[instrument(skip(self))]
    pub async fn get_chirp(&self, chirp_id: Uuid) -> ServiceResult<ChirpResponse> {
        let chirp = self
            .ctx
            .chirp_repo()
            .find_by_id(chirp_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Chirp", chirp_id.to_string()))?;

        Ok(ChirpResponse::from(&chirp))
    }

    /// Delete a chirp; only its author may do so
    #[instrument(skip(self))]
    pub async fn delete_chirp(&self, chirp_id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        let chirp = self
            .ctx
            .chirp_repo()
            .find_by_id(chirp_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Chirp", chirp_id.to_string()))?;

        if !AuthService::authorize_owner(user_id, chirp.user_id) {
            warn!(chirp_id = %chirp_id, user_id = %user_id, "Chirp delete refused: not the author");
            return Err(DomainError::NotChirpAuthor.into());
        }

        self.ctx.chirp_repo().delete(chirp_id).await?;

        info!(chirp_id = %chirp_id, "Chirp deleted");
        Ok(())
    }
}

/// Replace profane words with asterisks
///
/// Matching is whole-token on space-separated words, so a profane word with
/// adjacent punctuation passes through untouched.
fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if PROFANE_WORDS.iter().any(|p| word.eq_ignore_ascii_case(p)) {
                "****"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
