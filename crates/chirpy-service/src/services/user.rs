//! User service
//!
//! Handles user signup and credential updates.

use chirpy_common::auth::hash_password;
use chirpy_core::entities::User;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let hashed_password = hash_in_background(request.password).await?;

        let user = User::new(request.email, hashed_password);
        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, "User created");
        Ok(UserResponse::from(&user))
    }

    /// Replace the authenticated user's email and password
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn update_credentials(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let hashed_password = hash_in_background(request.password).await?;

        user.set_credentials(request.email, hashed_password);
        self.ctx.user_repo().update_credentials(&user).await?;

        info!(user_id = %user.id, "User credentials updated");
        Ok(UserResponse::from(&user))
    }

    /// Delete every user, returning the number of rows removed
    ///
    /// Chirps and refresh tokens go with their owners via cascade.
    #[instrument(skip(self))]
    pub async fn delete_all_users(&self) -> ServiceResult<u64> {
        let removed = self.ctx.user_repo().delete_all().await?;

        info!(removed, "All users deleted");
        Ok(removed)
    }
}

/// Run the password KDF off the async executor
async fn hash_in_background(password: String) -> ServiceResult<String> {
    let digest = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ServiceError::internal(e.to_string()))??;
    Ok(digest)
}
